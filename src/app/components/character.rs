//! Character profile card.

use dioxus::prelude::*;

use crate::catalog::{Character, CharacterRole};

fn role_class(role: CharacterRole) -> &'static str {
    match role {
        CharacterRole::Protagonist => "character-card role-protagonist",
        CharacterRole::Elder => "character-card role-elder",
        CharacterRole::Spirit => "character-card role-spirit",
    }
}

fn role_label(role: CharacterRole) -> &'static str {
    match role {
        CharacterRole::Protagonist => "Protagonist",
        CharacterRole::Elder => "Elder",
        CharacterRole::Spirit => "Spirit",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CharacterProfileProps {
    pub character: Character,
}

/// Portrait, name, role badge and bio for one cast member.
#[component]
pub fn CharacterProfile(props: CharacterProfileProps) -> Element {
    let c = &props.character;

    rsx! {
        article { class: role_class(c.role),
            img { class: "character-portrait", src: "{c.image}", alt: "{c.name}" }
            div { class: "character-body",
                h3 { "{c.name}" }
                span { class: "character-role", {role_label(c.role)} }
                p { "{c.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_gets_a_distinct_class() {
        let classes = [
            role_class(CharacterRole::Protagonist),
            role_class(CharacterRole::Elder),
            role_class(CharacterRole::Spirit),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
