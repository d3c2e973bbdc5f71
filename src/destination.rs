use std::{fmt, str::FromStr};
use thiserror::Error;

/// A GitHub repository written as `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("destination is empty")]
    Empty,
    #[error("destination `{0}` is not in the `owner/repo` form")]
    Malformed(String),
}

impl FromStr for Destination {
    type Err = DestinationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DestinationError::Empty);
        }

        match value.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Destination {
                    owner: owner.to_owned(),
                    repo: repo.to_owned(),
                })
            }
            _ => Err(DestinationError::Malformed(value.to_owned())),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_owner_and_repo() {
        let destination: Destination = "OpenTermsArchive/services-all".parse().unwrap();

        assert_eq!(destination.owner, "OpenTermsArchive");
        assert_eq!(destination.repo, "services-all");
        assert_eq!(destination.to_string(), "OpenTermsArchive/services-all");
    }

    #[test]
    fn should_reject_an_empty_destination() {
        assert_eq!("  ".parse::<Destination>(), Err(DestinationError::Empty));
    }

    #[test]
    fn should_reject_malformed_destinations() {
        for value in ["org", "org/", "/repo", "org/repo/extra"] {
            assert_eq!(
                value.parse::<Destination>(),
                Err(DestinationError::Malformed(value.to_owned())),
                "{value}"
            );
        }
    }
}
