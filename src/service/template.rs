//! Welcome message template rendering.
//!
//! Templates may contain the placeholders `{user}`, `{name}` and `{guild}`. Rendering is
//! a single left-to-right pass: substituted text is copied to the output and never
//! scanned again, so a display name containing `{guild}` stays literal. Anything else in
//! braces is left as written.

use crate::model::member::WelcomeRecipient;

/// Placeholder replaced with the member mention.
pub const USER_PLACEHOLDER: &str = "{user}";
/// Placeholder replaced with the member display name.
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Placeholder replaced with the guild name.
pub const GUILD_PLACEHOLDER: &str = "{guild}";

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub mention: &'a str,
    pub display_name: &'a str,
    pub guild_name: &'a str,
}

impl<'a> TemplateValues<'a> {
    fn lookup(&self, rest: &str) -> Option<(&'a str, usize)> {
        [
            (USER_PLACEHOLDER, self.mention),
            (NAME_PLACEHOLDER, self.display_name),
            (GUILD_PLACEHOLDER, self.guild_name),
        ]
        .into_iter()
        .find(|(placeholder, _)| rest.starts_with(placeholder))
        .map(|(placeholder, value)| (value, placeholder.len()))
    }
}

/// Renders `template` with `values`.
///
/// Pure and deterministic: identical arguments always produce identical output.
pub fn render(template: &str, values: &TemplateValues<'_>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        rest = &rest[open..];

        match values.lookup(rest) {
            Some((value, consumed)) => {
                rendered.push_str(value);
                rest = &rest[consumed..];
            }
            None => {
                rendered.push('{');
                rest = &rest[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Renders a guild's welcome template for `recipient`.
pub fn render_welcome(template: &str, guild_name: &str, recipient: &WelcomeRecipient) -> String {
    render(
        template,
        &TemplateValues {
            mention: &recipient.mention,
            display_name: &recipient.display_name,
            guild_name,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> TemplateValues<'static> {
        TemplateValues {
            mention: "@Alice",
            display_name: "Alice",
            guild_name: "Rustaceans",
        }
    }

    #[test]
    fn substitutes_every_placeholder() {
        let rendered = render("Welcome {user} ({name}) to {guild}!", &alice());

        assert_eq!(rendered, "Welcome @Alice (Alice) to Rustaceans!");
    }

    #[test]
    fn substitutes_repeated_placeholders() {
        assert_eq!(
            render("{name}, {name}, {user}", &alice()),
            "Alice, Alice, @Alice"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_verbatim() {
        assert_eq!(
            render("Hi {nickname} from {GUILD} {", &alice()),
            "Hi {nickname} from {GUILD} {"
        );
    }

    #[test]
    fn does_not_rescan_substituted_text() {
        let values = TemplateValues {
            mention: "<@1>",
            display_name: "{guild}{user}",
            guild_name: "G",
        };

        assert_eq!(render("{name} joined {guild}", &values), "{guild}{user} joined G");
    }

    #[test]
    fn handles_nested_and_adjacent_braces() {
        assert_eq!(render("{{user}}", &alice()), "{@Alice}");
        assert_eq!(render("{user}{guild}", &alice()), "@AliceRustaceans");
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            render("¡Hola {name}! 👋 {guild}", &alice()),
            "¡Hola Alice! 👋 Rustaceans"
        );
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(render("Hello there", &alice()), "Hello there");
        assert_eq!(render("", &alice()), "");
    }

    #[test]
    fn renders_for_recipient_with_mention_token() {
        let recipient = WelcomeRecipient::new(42, "Alice");

        assert_eq!(
            render_welcome("Hi {user} aka {name} in {guild}", "G", &recipient),
            "Hi <@42> aka Alice in G"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let template = "Welcome {user} to {guild}, {name}! {unknown}";

        assert_eq!(render(template, &alice()), render(template, &alice()));
    }
}
