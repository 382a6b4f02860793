//! Static mock catalogs backing the browsing pages.
//!
//! There is no backend; every page renders these records directly. Asset
//! URLs are opaque strings.

/// An eBook listing on the eBooks page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ebook {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub cover: &'static str,
    pub rating: f32,
    pub categories: &'static [&'static str],
}

pub const EBOOKS: &[Ebook] = &[
    Ebook {
        id: 1,
        title: "The Shadow Phoenix Chronicles",
        author: "Miyazaki Haru",
        cover: "https://picsum.photos/300/400?random=1",
        rating: 4.8,
        categories: &["Fantasy", "Adventure"],
    },
    Ebook {
        id: 2,
        title: "Mecha Academy",
        author: "Tanaka Rei",
        cover: "https://picsum.photos/300/400?random=2",
        rating: 4.5,
        categories: &["Sci-Fi", "Action"],
    },
    Ebook {
        id: 3,
        title: "Magical School Diaries",
        author: "Suzuki Aoi",
        cover: "https://picsum.photos/300/400?random=3",
        rating: 4.7,
        categories: &["Fantasy", "Slice of Life"],
    },
    Ebook {
        id: 4,
        title: "Samurai of the Lost Kingdom",
        author: "Watanabe Kenji",
        cover: "https://picsum.photos/300/400?random=4",
        rating: 4.9,
        categories: &["Historical", "Action"],
    },
    Ebook {
        id: 5,
        title: "Yokai Adventures",
        author: "Nakamura Yuki",
        cover: "https://picsum.photos/300/400?random=5",
        rating: 4.6,
        categories: &["Fantasy", "Supernatural"],
    },
    Ebook {
        id: 6,
        title: "Neon City Hunters",
        author: "Ito Hiroshi",
        cover: "https://picsum.photos/300/400?random=6",
        rating: 4.4,
        categories: &["Cyberpunk", "Action"],
    },
];

/// Distinct eBook categories in first-appearance order.
pub fn ebook_categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for ebook in EBOOKS {
        for category in ebook.categories {
            if !out.contains(category) {
                out.push(*category);
            }
        }
    }
    out
}

/// eBooks whose category list contains `category` (case-insensitive).
/// An empty filter returns everything.
pub fn ebooks_in_category(category: &str) -> Vec<&'static Ebook> {
    if category.is_empty() {
        return EBOOKS.iter().collect();
    }
    EBOOKS
        .iter()
        .filter(|e| {
            e.categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category))
        })
        .collect()
}

/// Number of filled stars to render for a rating (out of 5).
pub fn filled_stars(rating: f32) -> usize {
    (rating.floor().clamp(0.0, 5.0)) as usize
}

/// A story listing on the Stories page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub cover: &'static str,
    pub excerpt: &'static str,
    pub chapters: u32,
    pub tags: &'static [&'static str],
}

pub const FEATURED_STORIES: &[Story] = &[
    Story {
        id: 1,
        title: "Umbros: Shadow Awakening",
        author: "Miyazaki Haru",
        cover: "https://picsum.photos/800/400?random=1",
        excerpt: "In the aftermath of his village's destruction, Kael discovers a mysterious shadow that grants him incredible power, but at what cost?",
        chapters: 14,
        tags: &["Action", "Fantasy", "Drama"],
    },
    Story {
        id: 2,
        title: "The Last Samurai Princess",
        author: "Takahashi Yumiko",
        cover: "https://picsum.photos/800/400?random=2",
        excerpt: "After her clan's destruction, Princess Himari takes up her father's sword to avenge her family and restore honor to her name.",
        chapters: 22,
        tags: &["Historical", "Action", "Drama"],
    },
    Story {
        id: 3,
        title: "Digital Dreams",
        author: "Nakamura Ryo",
        cover: "https://picsum.photos/800/400?random=3",
        excerpt: "When players of a popular VRMMO find themselves unable to log out, the line between virtual and reality begins to blur.",
        chapters: 18,
        tags: &["Sci-Fi", "Adventure", "Mystery"],
    },
];

pub const POPULAR_STORIES: &[Story] = &[
    Story {
        id: 4,
        title: "Academy of Magical Arts",
        author: "Sato Mei",
        cover: "https://picsum.photos/300/200?random=4",
        excerpt: "When ordinary Hinata discovers she has extraordinary magical abilities, she's invited to attend the prestigious Academy of Magical Arts.",
        chapters: 42,
        tags: &["Fantasy", "School", "Coming of Age"],
    },
    Story {
        id: 5,
        title: "Mecha Pilots: New Generation",
        author: "Yamamoto Kenji",
        cover: "https://picsum.photos/300/200?random=5",
        excerpt: "Five teenagers are selected to pilot experimental mecha units to defend Earth from an alien invasion.",
        chapters: 36,
        tags: &["Sci-Fi", "Mecha", "Action"],
    },
    Story {
        id: 6,
        title: "Spirits of the Forest",
        author: "Kobayashi Akiko",
        cover: "https://picsum.photos/300/200?random=6",
        excerpt: "Young priestess Sakura must journey through an ancient forest to cleanse the corrupted spirits and restore balance to nature.",
        chapters: 29,
        tags: &["Fantasy", "Supernatural", "Adventure"],
    },
    Story {
        id: 7,
        title: "Cooking Battle Royale",
        author: "Ikeda Takeshi",
        cover: "https://picsum.photos/300/200?random=7",
        excerpt: "Top chefs from around the world compete in an extraordinary culinary competition with unusual ingredients and impossible challenges.",
        chapters: 52,
        tags: &["Comedy", "Cooking", "Competition"],
    },
];

/// An artwork entry in the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtPiece {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub thumbnail: &'static str,
    pub full_image: &'static str,
    pub artist: &'static str,
}

pub const GALLERY: &[ArtPiece] = &[
    ArtPiece {
        id: 1,
        title: "Shadow Phoenix Rising",
        category: "Official Art",
        thumbnail: "https://picsum.photos/400/300?random=1",
        full_image: "https://picsum.photos/1200/900?random=1",
        artist: "Studio Ghibli",
    },
    ArtPiece {
        id: 2,
        title: "Kael Training Scene",
        category: "Concept Art",
        thumbnail: "https://picsum.photos/400/300?random=2",
        full_image: "https://picsum.photos/1200/900?random=2",
        artist: "Miyazaki Art Team",
    },
    ArtPiece {
        id: 3,
        title: "The Obsidian Sanctum",
        category: "Background Art",
        thumbnail: "https://picsum.photos/400/300?random=3",
        full_image: "https://picsum.photos/1200/900?random=3",
        artist: "Landscape Masters",
    },
    ArtPiece {
        id: 4,
        title: "Echo Compatibility Test",
        category: "Key Visual",
        thumbnail: "https://picsum.photos/400/300?random=4",
        full_image: "https://picsum.photos/1200/900?random=4",
        artist: "Animation Studio",
    },
    ArtPiece {
        id: 5,
        title: "Elder Council",
        category: "Character Design",
        thumbnail: "https://picsum.photos/400/300?random=5",
        full_image: "https://picsum.photos/1200/900?random=5",
        artist: "Character Design Team",
    },
    ArtPiece {
        id: 6,
        title: "Village in Flames",
        category: "Background Art",
        thumbnail: "https://picsum.photos/400/300?random=6",
        full_image: "https://picsum.photos/1200/900?random=6",
        artist: "Fire Effects Studio",
    },
    ArtPiece {
        id: 7,
        title: "Umbros Manifestation",
        category: "Key Visual",
        thumbnail: "https://picsum.photos/400/300?random=7",
        full_image: "https://picsum.photos/1200/900?random=7",
        artist: "Special Effects Team",
    },
    ArtPiece {
        id: 8,
        title: "Final Battle Sketch",
        category: "Concept Art",
        thumbnail: "https://picsum.photos/400/300?random=8",
        full_image: "https://picsum.photos/1200/900?random=8",
        artist: "Action Scene Artists",
    },
];

/// Distinct gallery categories in first-appearance order.
pub fn gallery_categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for piece in GALLERY {
        if !out.contains(&piece.category) {
            out.push(piece.category);
        }
    }
    out
}

/// Gallery pieces matching `category`; "All" or empty returns everything.
pub fn gallery_in_category(category: &str) -> Vec<&'static ArtPiece> {
    if category.is_empty() || category == "All" {
        return GALLERY.iter().collect();
    }
    GALLERY.iter().filter(|p| p.category == category).collect()
}

/// A released episode on the Latest page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Episode {
    pub id: u32,
    pub title: &'static str,
    pub episode: u32,
    pub thumbnail: &'static str,
    pub released: &'static str,
    pub duration_min: u32,
    pub is_new: bool,
}

pub const LATEST_EPISODES: &[Episode] = &[
    Episode {
        id: 1,
        title: "Shadow Phoenix Chronicles",
        episode: 14,
        thumbnail: "https://picsum.photos/600/340?random=1",
        released: "Today",
        duration_min: 24,
        is_new: true,
    },
    Episode {
        id: 2,
        title: "Mecha Warrior Academy",
        episode: 22,
        thumbnail: "https://picsum.photos/600/340?random=2",
        released: "Yesterday",
        duration_min: 24,
        is_new: true,
    },
    Episode {
        id: 3,
        title: "Magical Cooking Contest",
        episode: 8,
        thumbnail: "https://picsum.photos/600/340?random=3",
        released: "2 days ago",
        duration_min: 24,
        is_new: true,
    },
    Episode {
        id: 4,
        title: "Samurai Legacy",
        episode: 41,
        thumbnail: "https://picsum.photos/600/340?random=4",
        released: "3 days ago",
        duration_min: 24,
        is_new: false,
    },
    Episode {
        id: 5,
        title: "Digital Dreamers",
        episode: 16,
        thumbnail: "https://picsum.photos/600/340?random=5",
        released: "5 days ago",
        duration_min: 24,
        is_new: false,
    },
    Episode {
        id: 6,
        title: "Academy of Heroes",
        episode: 35,
        thumbnail: "https://picsum.photos/600/340?random=6",
        released: "1 week ago",
        duration_min: 24,
        is_new: false,
    },
];

/// An announced-but-unreleased season on the Latest page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpcomingSeason {
    pub id: u32,
    pub title: &'static str,
    pub season: &'static str,
    pub thumbnail: &'static str,
    pub release_label: &'static str,
    pub genre: &'static str,
}

pub const UPCOMING_SEASONS: &[UpcomingSeason] = &[
    UpcomingSeason {
        id: 101,
        title: "Dragon Kingdom",
        season: "New Series",
        thumbnail: "https://picsum.photos/600/340?random=7",
        release_label: "Coming next week",
        genre: "Fantasy, Adventure",
    },
    UpcomingSeason {
        id: 102,
        title: "Cyber Detectives",
        season: "Season 2",
        thumbnail: "https://picsum.photos/600/340?random=8",
        release_label: "Coming in 2 weeks",
        genre: "Mystery, Sci-Fi",
    },
];

/// Role of a character in the story, drives card styling on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterRole {
    Protagonist,
    Spirit,
    Elder,
}

/// A character profile card on the home page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Character {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub role: CharacterRole,
}

pub const CHARACTERS: &[Character] = &[
    Character {
        name: "Kael",
        description: "A village orphan with mysterious powers, haunted by his past and desperate to understand what saved him and why.",
        image: "/kael.jpg",
        role: CharacterRole::Protagonist,
    },
    Character {
        name: "Master Riven",
        description: "The head elder of the Obsidian Sanctum, stern but fair. Hides dark secrets about the true nature of Echoes.",
        image: "/elder.jpg",
        role: CharacterRole::Elder,
    },
    Character {
        name: "Umbros",
        description: "The Shadow Phoenix, a mythical Echo thought to be merely legend, capable of immense destruction when unleashed.",
        image: "/umbros.jpg",
        role: CharacterRole::Spirit,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_returns_all_ebooks() {
        assert_eq!(ebooks_in_category("").len(), EBOOKS.len());
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let action = ebooks_in_category("action");
        assert_eq!(action.len(), 3);
        assert!(action.iter().all(|e| e.categories.contains(&"Action")));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        assert!(ebooks_in_category("Isekai").is_empty());
    }

    #[test]
    fn star_counts() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.2), 0);
        assert_eq!(filled_stars(-1.0), 0);
    }

    #[test]
    fn gallery_categories_are_unique_and_ordered() {
        let cats = gallery_categories();
        assert_eq!(
            cats,
            [
                "Official Art",
                "Concept Art",
                "Background Art",
                "Key Visual",
                "Character Design",
            ]
        );
    }

    #[test]
    fn gallery_filter_all_vs_specific() {
        assert_eq!(gallery_in_category("All").len(), GALLERY.len());
        let concept = gallery_in_category("Concept Art");
        assert_eq!(concept.len(), 2);
        assert!(concept.iter().all(|p| p.category == "Concept Art"));
    }
}
