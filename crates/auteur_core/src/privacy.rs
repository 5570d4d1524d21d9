//! Upload visibility.

use serde::{Deserialize, Serialize};

/// Visibility applied to the published video.
///
/// # Examples
///
/// ```
/// use auteur_core::PrivacyStatus;
/// use std::str::FromStr;
///
/// assert_eq!(PrivacyStatus::default(), PrivacyStatus::Private);
/// assert_eq!(PrivacyStatus::from_str("unlisted").unwrap(), PrivacyStatus::Unlisted);
/// assert!(PrivacyStatus::from_str("friends").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyStatus {
    /// Anyone can find and watch the video
    Public,
    /// Only the channel owner can watch the video
    #[default]
    Private,
    /// Anyone with the link can watch the video
    Unlisted,
}
