use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            )]
            #[serde(transparent)]
            pub struct $name(pub String);

            impl $name {
                #[must_use]
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                #[must_use]
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

id_type!(
    TournamentId,
    TeamId,
    PlayerId,
    CourseId,
    /// Id of a persisted hole record (one player, one hole, one round).
    HoleId,
);
