//! Score sharing text

use crate::sim::Rank;

/// Link appended to every shared score
pub const DOWNLOAD_LINK: &str = "bentechgames.wordpress.com/getgameid1";

/// Message offered to the system share sheet (or copied to the clipboard)
pub fn share_message(score: u32) -> String {
    let mut message = format!(
        "I scored {} in Swipey Bird, it isn't as simple as the other Flappy games, \
         you must swipe up and down to control the bird",
        score
    );
    let rank = Rank::for_score(score);
    if rank.is_ranked() {
        message.push_str(&format!(" and achieved {} rank!", rank.label()));
    }
    message.push_str(&format!(" Download the game: {}", DOWNLOAD_LINK));
    message
}
