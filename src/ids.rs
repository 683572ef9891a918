//! Shared shape of the uuid-backed identifier newtypes.

/// Defines a `Copy` uuid newtype with random construction, parsing, and
/// display.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $noun:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", $noun, " identifier.")]
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", $noun, " identifier from an existing UUID.")]
            #[must_use]
            pub const fn from_uuid(value: uuid::Uuid) -> Self {
                Self(value)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<uuid::Uuid> for $name {
            fn as_ref(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(value.trim()).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use uuid_identifier;

#[cfg(test)]
mod tests {
    use crate::board::domain::BoardId;
    use crate::task::domain::TaskId;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn identifiers_parse_with_surrounding_whitespace() {
        let raw = Uuid::new_v4();
        let board_id: BoardId = format!(" {raw} ").parse().expect("board id parses");
        let task_id: TaskId = raw.to_string().parse().expect("task id parses");

        assert_eq!(board_id.into_inner(), raw);
        assert_eq!(task_id.to_string(), raw.to_string());
    }

    #[rstest]
    #[case("")]
    #[case("board-1")]
    #[case("00000000-0000-0000-0000")]
    fn malformed_identifiers_are_rejected(#[case] raw: &str) {
        assert!(raw.parse::<BoardId>().is_err());
        assert!(raw.parse::<TaskId>().is_err());
    }

    #[rstest]
    fn fresh_identifiers_are_distinct() {
        assert_ne!(BoardId::new(), BoardId::new());
        assert_ne!(TaskId::default(), TaskId::default());
    }
}
