use dioxus::prelude::*;

/// Emoji stand-ins for the built-in avatar set; keys match
/// [`crate::model::user::AVATARS`].
pub fn avatar_glyph(avatar: &str) -> &'static str {
    match avatar {
        "fox" => "🦊",
        "owl" => "🦉",
        "panda" => "🐼",
        "koala" => "🐨",
        "tiger" => "🐯",
        "whale" => "🐳",
        _ => "📚",
    }
}

#[component]
pub fn Avatar(avatar: String, class: Option<&'static str>) -> Element {
    let class: &str = if let Some(class) = class {
        class
    } else {
        "text-4xl"
    };

    rsx!(
        span {
            class: "{class}",
            role: "img",
            aria_label: "{avatar}",
            {avatar_glyph(&avatar)}
        }
    )
}
