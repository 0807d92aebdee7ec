//! Story feed fixtures.

use super::{Post, Story};

pub static STORIES: &[Story] = &[
    Story { id: "1", username: "Your Story", image: "https://picsum.photos/200/300?random=1", has_story: true },
    Story { id: "2", username: "john_doe", image: "https://picsum.photos/200/300?random=2", has_story: true },
    Story { id: "3", username: "jane_smith", image: "https://picsum.photos/200/300?random=3", has_story: true },
    Story { id: "4", username: "alex_wilson", image: "https://picsum.photos/200/300?random=4", has_story: true },
    Story { id: "5", username: "sarah_jones", image: "https://picsum.photos/200/300?random=5", has_story: true },
    Story { id: "6", username: "mike_brown", image: "https://picsum.photos/200/300?random=6", has_story: true },
    Story { id: "7", username: "emma_davis", image: "https://picsum.photos/200/300?random=7", has_story: true },
    Story { id: "8", username: "chris_miller", image: "https://picsum.photos/200/300?random=8", has_story: true },
];

pub static POSTS: &[Post] = &[
    Post {
        id: "1",
        username: "john_doe",
        avatar: "https://picsum.photos/100/100?random=10",
        image: "https://picsum.photos/400/400?random=11",
        likes: 1234,
        caption: "Beautiful sunset today! 🌅",
        time_ago: "2 hours ago",
    },
    Post {
        id: "2",
        username: "jane_smith",
        avatar: "https://picsum.photos/100/100?random=12",
        image: "https://picsum.photos/400/400?random=13",
        likes: 567,
        caption: "Coffee time ☕ #morningvibes",
        time_ago: "5 hours ago",
    },
    Post {
        id: "3",
        username: "alex_wilson",
        avatar: "https://picsum.photos/100/100?random=14",
        image: "https://picsum.photos/400/400?random=15",
        likes: 890,
        caption: "Nature walk 🌿",
        time_ago: "8 hours ago",
    },
];

impl Story {
    /// Label under a story bubble; the first bubble is always the viewer's own.
    pub fn label(&self, index: usize) -> &'static str {
        if index == 0 {
            "Your Story"
        } else {
            self.username
        }
    }
}

impl Post {
    pub fn likes_label(&self) -> String {
        format!("{} likes", crate::format::group_thousands(self.likes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_labels() {
        assert_eq!(STORIES[0].label(0), "Your Story");
        assert_eq!(STORIES[1].label(1), "john_doe");
        assert_eq!(STORIES[3].label(0), "Your Story");
    }

    #[test]
    fn test_likes_label() {
        assert_eq!(POSTS[0].likes_label(), "1,234 likes");
        assert_eq!(POSTS[1].likes_label(), "567 likes");
    }
}
