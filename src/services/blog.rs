use crate::models::BlogPost;

pub const DEFAULT_LATEST_LIMIT: usize = 3;

/// Most recent posts first, at most `limit` of them.
pub fn latest_posts(posts: &[BlogPost], limit: usize) -> Vec<&BlogPost> {
    let mut sorted: Vec<&BlogPost> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
