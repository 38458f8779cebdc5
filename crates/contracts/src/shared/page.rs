/// Признаки текущей страницы, по которым решается, какие компоненты поднимать
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSignals<'a> {
    pub path: &'a str,
    pub title: &'a str,
    /// Текст первого `h1`, если он есть
    pub heading: Option<&'a str>,
}

impl PageSignals<'_> {
    pub fn is_portfolio(&self) -> bool {
        self.path.contains("portfolio.html")
            || self.title.contains("Portfolio")
            || self.heading.is_some_and(|h| h.contains("Portfolio"))
    }

    pub fn is_contact(&self) -> bool {
        self.path.contains("contact.html")
    }
}
