//! Pure aggregation helpers over an in-memory list of blogs.

use std::collections::HashMap;

use crate::domain::Blog;

/// An author together with the number of blogs they wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Sum of the `likes` field over all blogs. Zero for an empty list.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// The blog with the most likes.
///
/// Ties resolve to the first blog attaining the maximum in input order.
/// `None` for an empty list.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(b) if b.likes >= blog.likes => Some(b),
        _ => Some(blog),
    })
}

/// The author with the largest number of blogs, and that count.
///
/// Blogs without an author are not counted. Ties resolve to the first
/// author reaching the maximum count in input order. `None` when no blog
/// carries an author.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut leader: Option<AuthorCount> = None;

    for author in blogs.iter().filter_map(|b| b.author.as_deref()) {
        let count = counts.entry(author).or_insert(0);
        *count += 1;

        if leader.as_ref().is_none_or(|l| *count > l.count) {
            leader = Some(AuthorCount {
                author: author.to_string(),
                count: *count,
            });
        }
    }

    leader
}
