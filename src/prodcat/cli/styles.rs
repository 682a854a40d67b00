use console::Style;
use once_cell::sync::Lazy;
use prodcat::model::Sex;

pub struct Palette {
    pub header: Style,
    pub product_id: Style,
    pub user_male: Style,
    pub user_female: Style,
    pub active: Style,
    pub inactive: Style,
    pub missing: Style,
}

pub static PRODCAT_THEME: Lazy<Palette> = Lazy::new(|| Palette {
    header: Style::new().bold(),
    product_id: Style::new().bold(),
    user_male: Style::new().blue(),
    user_female: Style::new().red(),
    active: Style::new().cyan().bold(),
    inactive: Style::new(),
    missing: Style::new().yellow().italic(),
});

impl Palette {
    pub fn for_sex(&self, sex: Sex) -> &Style {
        match sex {
            Sex::Male => &self.user_male,
            Sex::Female => &self.user_female,
        }
    }
}

pub fn paint(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.apply_to(text).force_styling(true).to_string()
    } else {
        text.to_string()
    }
}
