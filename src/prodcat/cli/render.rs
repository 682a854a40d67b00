//! # Rendering Module
//!
//! Turns command results into terminal text. Every function returns a `String`
//! so output can be tested without a terminal.
//!
//! Layout (widths, truncation, padding) is computed on plain text first and
//! styled afterwards, so ANSI codes never affect alignment.

use super::styles::{paint, PRODCAT_THEME};
use prodcat::api::{CategoryButton, ProductRow, UserTab};
use prodcat::filter::{FilterCriteria, UserFilter};
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";
pub const MISSING: &str = "(unknown)";

const GAP: &str = "  ";
const MIN_PRODUCT_WIDTH: usize = 8;
const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub line_width: usize,
    pub use_color: bool,
}

/// Renders the `ID | Product | Category | User` table.
///
/// The product column shrinks (down to a minimum) to keep lines within
/// `line_width`; the other columns are never truncated.
pub fn render_product_table(rows: &[ProductRow], opts: ViewOptions) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let theme = &*PRODCAT_THEME;
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.product.id.to_string(),
                row.product.name.clone(),
                row.category
                    .as_ref()
                    .map(|c| c.label())
                    .unwrap_or_else(|| MISSING.to_string()),
                row.owner
                    .as_ref()
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| MISSING.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }
    let fixed = widths[0] + widths[2] + widths[3] + GAP.len() * 3;
    let available = opts.line_width.saturating_sub(fixed).max(MIN_PRODUCT_WIDTH);
    widths[1] = widths[1].min(available);

    let mut out = String::new();

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_right(h, w))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(&paint(&theme.header, header.trim_end(), opts.use_color));
    out.push('\n');

    for (row, cell) in rows.iter().zip(&cells) {
        let id = paint(
            &theme.product_id,
            &pad_left(&cell[0], widths[0]),
            opts.use_color,
        );
        let name = pad_right(&truncate_to_width(&cell[1], widths[1]), widths[1]);
        let category = match row.category {
            Some(_) => pad_right(&cell[2], widths[2]),
            None => paint(&theme.missing, &pad_right(MISSING, widths[2]), opts.use_color),
        };
        let user = match &row.owner {
            Some(owner) => paint(theme.for_sex(owner.sex), &cell[3], opts.use_color),
            None => paint(&theme.missing, MISSING, opts.use_color),
        };

        out.push_str(&[id, name, category, user].join(GAP));
        out.push('\n');
    }

    out
}

pub fn render_user_tabs(tabs: &[UserTab], use_color: bool) -> String {
    let theme = &*PRODCAT_THEME;
    let mut out = String::new();

    for tab in tabs {
        let (id, label, style) = match &tab.user {
            None => (String::new(), "All".to_string(), &theme.inactive),
            Some(user) => (user.id.to_string(), user.name.clone(), theme.for_sex(user.sex)),
        };
        let style = if tab.is_active { &theme.active } else { style };
        out.push_str(&format!(
            "{} {:>3}  {}\n",
            marker(tab.is_active),
            id,
            paint(style, &label, use_color)
        ));
    }

    out
}

pub fn render_category_buttons(buttons: &[CategoryButton], use_color: bool) -> String {
    let theme = &*PRODCAT_THEME;
    let mut out = String::new();

    for button in buttons {
        let style = if button.is_selected {
            &theme.active
        } else {
            &theme.inactive
        };
        let line = match &button.category {
            None => format!(
                "{} {:>3}  {}",
                marker(button.is_selected),
                "",
                paint(style, "All", use_color)
            ),
            Some(category) => {
                let owner = button
                    .owner
                    .as_ref()
                    .map(|u| u.name.as_str())
                    .unwrap_or(MISSING);
                format!(
                    "{} {:>3}  {}  ({})",
                    marker(button.is_selected),
                    category.id,
                    paint(style, &category.label(), use_color),
                    owner
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// One-line description of the active filters, shown by `browse`.
pub fn render_filter_summary(criteria: &FilterCriteria) -> String {
    let query = if criteria.query.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", criteria.query)
    };
    let user = match &criteria.user {
        UserFilter::All => "All".to_string(),
        UserFilter::Specific(user) => user.name.clone(),
    };
    let categories = if criteria.categories.is_empty() {
        "All".to_string()
    } else {
        criteria
            .categories
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("query: {}  user: {}  categories: {}", query, user, categories)
}

fn marker(active: bool) -> &'static str {
    if active {
        "*"
    } else {
        " "
    }
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat::api::CatalogApi;
    use prodcat::model::{Category, CategoryId, Product, Sex, User};
    use prodcat::store::builtin::BuiltinSource;

    const PLAIN: ViewOptions = ViewOptions {
        line_width: 100,
        use_color: false,
    };

    fn api() -> CatalogApi {
        CatalogApi::load(&BuiltinSource).unwrap()
    }

    #[test]
    fn empty_table_shows_message() {
        assert_eq!(
            render_product_table(&[], PLAIN),
            "No products matching selected criteria\n"
        );
    }

    #[test]
    fn table_lists_rows_with_joined_columns() {
        let mut api = api();
        api.set_query("app");
        let rows = api.list_products().unwrap().listed_products;

        let out = render_product_table(&rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Apple"));
        assert!(lines[1].contains("🍏 - Fruits"));
        assert!(lines[1].ends_with("Anna"));
        assert!(lines[2].contains("Pineapple"));
    }

    #[test]
    fn narrow_width_truncates_product_column() {
        let rows = api().list_products().unwrap().listed_products;
        let out = render_product_table(
            &rows,
            ViewOptions {
                line_width: 36,
                use_color: false,
            },
        );

        assert!(out.contains("Jack Da…"));
        for line in out.lines() {
            assert!(line.width() <= 36, "too wide: {:?}", line);
        }
    }

    #[test]
    fn missing_joins_render_placeholder() {
        let rows = vec![ProductRow {
            product: Product::new(7, "Ghost", 99),
            category: None,
            owner: None,
        }];
        let out = render_product_table(&rows, PLAIN);
        assert_eq!(out.matches(MISSING).count(), 2);
    }

    #[test]
    fn colored_owner_uses_sex_style() {
        let rows = vec![ProductRow {
            product: Product::new(1, "Bread", 1),
            category: Some(Category::new(1, "Grocery", "🍞", 2)),
            owner: Some(User::new(2, "Anna", Sex::Female)),
        }];
        let out = render_product_table(
            &rows,
            ViewOptions {
                line_width: 100,
                use_color: true,
            },
        );
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Anna"));
    }

    #[test]
    fn tabs_mark_the_active_entry() {
        let mut api = api();
        api.select_user_by("Max").unwrap();
        let out = render_user_tabs(&api.user_tabs().unwrap().user_tabs, false);
        let active: Vec<&str> = out.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(active, vec!["*   3  Max"]);
    }

    #[test]
    fn category_buttons_show_owner_and_selection() {
        let mut api = api();
        api.toggle_category(CategoryId(5));
        let out = render_category_buttons(&api.category_buttons().unwrap().category_buttons, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "       All");
        assert_eq!(lines[5], "*   5  👚 - Clothes  (Max)");
    }

    #[test]
    fn summary_describes_criteria() {
        let mut api = api();
        assert_eq!(
            render_filter_summary(api.controller().criteria()),
            "query: -  user: All  categories: All"
        );

        api.set_query("app");
        api.select_user_by("anna").unwrap();
        api.toggle_category(CategoryId(3));
        api.toggle_category(CategoryId(1));
        assert_eq!(
            render_filter_summary(api.controller().criteria()),
            "query: \"app\"  user: Anna  categories: 1, 3"
        );
    }
}
