//! Site identity, shared by the HTML shell and the title formatter.

pub const NAME: &str = "folio";
pub const DESCRIPTION: &str =
    "Portfolio and blog of an html, css and js developer with over 15 years experience.";
pub const LANGUAGE: &str = "en";
/// Where cargo-leptos writes the compiled tailwind stylesheet.
pub const STYLESHEET_PATH: &str = "/pkg/folio.css";

/// `"{page} - {site}"`, or just the site name when the page has no title.
pub fn page_title(text: String) -> String {
    if text.is_empty() {
        String::from(NAME)
    } else {
        format!("{} - {}", text, NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_page_is_the_site_name() {
        assert_eq!("folio", page_title(String::new()));
        assert_eq!("Blog - folio", page_title(String::from("Blog")));
    }
}
