//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity bot User.
///
/// The user is a verified bot account without a custom avatar, using the
/// post-2023 username system (discriminator `"0"`).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Optional display name
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "bot": true,
        "system": false,
        "mfa_enabled": true,
        "banner": null,
        "accent_color": null,
        "locale": "en-US",
        "verified": true,
        "flags": 0,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
