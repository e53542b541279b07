use std::cell::RefCell;
use std::rc::Rc;

use yew::{BaseComponent, Callback, ServerRenderer};

pub async fn render_with<C, F>(create_props: F) -> String
where
    C: BaseComponent,
    F: 'static + Send + FnOnce() -> C::Properties,
{
    ServerRenderer::<C>::with_props(create_props)
        .hydratable(false)
        .render()
        .await
}

/// Rendered markup with every tag stripped.
pub fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// The opening tag that contains `needle`.
pub fn tag_containing<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// A callback that keeps every value it is emitted with.
pub fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let seen = seen.clone();
        Callback::from(move |value: T| seen.borrow_mut().push(value))
    };
    (callback, seen)
}
