use lazy_static::lazy_static;
use minijinja::Environment;
use serde::Serialize;

lazy_static! {
    static ref TEMPLATES: Environment<'static> = build_environment();
}

/// Returns the embedded source of a page template, if one exists with that name.
fn template_source(name: &str) -> Option<&'static str> {
    let source = match name {
        "layouts/boilerplate.html" => include_str!("../templates/layouts/boilerplate.html"),
        "home.html" => include_str!("../templates/home.html"),
        "error.html" => include_str!("../templates/error.html"),
        "campgrounds/index.html" => include_str!("../templates/campgrounds/index.html"),
        "campgrounds/new.html" => include_str!("../templates/campgrounds/new.html"),
        "campgrounds/show.html" => include_str!("../templates/campgrounds/show.html"),
        "campgrounds/edit.html" => include_str!("../templates/campgrounds/edit.html"),
        _ => return None,
    };
    Some(source)
}

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(|name| Ok(template_source(name).map(str::to_owned)));
    env.add_filter("price", format_price);
    env
}

/// Formats a nightly price: whole amounts without decimals, others with two.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Renders a page template with the given context.
///
/// Templates ending in `.html` are autoescaped.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    TEMPLATES.get_template(name)?.render(ctx)
}
