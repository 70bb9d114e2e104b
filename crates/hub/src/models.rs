use serde::{Deserialize, Serialize};
use slotcast_core::models::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBio {
    #[serde(default)]
    pub bio: Option<String>,
}

/// A social-network account as returned by the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub fid: UserId,
    pub username: String,
    pub display_name: String,
    pub pfp: ProfilePicture,
    #[serde(default)]
    pub profile: Option<ProfileBio>,
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CastRequest<'a> {
    pub text: &'a str,
    pub embeds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserResult {
    pub user: Profile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersResult {
    pub users: Vec<Profile>,
}
