//! User display mapping

use testbed_application::MappingConfiguration;
use testbed_application::ports::MappingProfile;
use testbed_domain::value_objects::{User, UserDisplay, UserState};

/// Maps users into display shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct UserProfile;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn state_label(state: UserState) -> &'static str {
    match state {
        UserState::Active => "Active",
        UserState::Disabled => "Disabled",
        UserState::Invited => "Invited",
    }
}

impl MappingProfile for UserProfile {
    fn profile_name(&self) -> &str {
        "user"
    }

    fn configure(&self, config: &mut MappingConfiguration) {
        config.define(|source: &User, _| {
            Ok(UserDisplay {
                id: source.id,
                name: source.name.clone(),
                email: source.email.to_lowercase(),
                initials: initials(&source.name),
                state: state_label(source.state).to_string(),
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Hopper"), "GB");
        assert_eq!(initials(""), "");
    }
}
