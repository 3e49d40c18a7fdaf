use serenity::all::{PartialChannel, PartialMember, ResolvedOption, ResolvedValue, User};

fn find<'o, 'a>(options: &'o [ResolvedOption<'a>], name: &str) -> Option<&'o ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

pub fn string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    match find(options, name)? {
        ResolvedValue::String(value) => Some(*value),
        _ => None,
    }
}

pub fn boolean(options: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    match find(options, name)? {
        ResolvedValue::Boolean(value) => Some(*value),
        _ => None,
    }
}

pub fn channel<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a PartialChannel> {
    match find(options, name)? {
        ResolvedValue::Channel(channel) => Some(*channel),
        _ => None,
    }
}

/// User option together with the member data Discord resolved for it, if any.
pub fn user<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Option<(&'a User, Option<&'a PartialMember>)> {
    match find(options, name)? {
        ResolvedValue::User(user, member) => Some((*user, *member)),
        _ => None,
    }
}
