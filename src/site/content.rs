//! Static page copy.

/// Text under the About heading.
pub const ABOUT: &[&str] = &[
    "I'm Lukas, a full-stack software engineer at Swimage.",
    "I build web platforms end to end: typed frontends, Python and Node",
    "services, relational databases and the cloud plumbing around them.",
    "",
    "Lately I've been training and evaluating small language models and",
    "turning them into tools people actually use.",
];

/// Text under the Contact heading.
pub const CONTACT: &[&str] = &[
    "Email     lukaskanopka@icloud.com",
    "GitHub    github.com/LukasKanopka",
    "LinkedIn  linkedin.com/in/laurynaskanopka",
    "",
    "Press F3 to send a message.",
];

/// Where a project's call to action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    /// A public URL
    Url(&'static str),
    /// Demo or source links are not published yet
    DemoPending,
    /// Still being built
    ComingSoon,
}

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Extended description shown in the details modal
    pub details: &'static [&'static str],
    pub link: ProjectLink,
}

impl Project {
    /// Notification text for following the project's link.
    pub fn action_message(&self) -> String {
        match self.link {
            ProjectLink::Url(url) => format!("Visit {}", url),
            ProjectLink::ComingSoon => "This project is still in development. Stay tuned!".to_string(),
            ProjectLink::DemoPending => "Demo links will be available soon!".to_string(),
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mini GPT",
        summary: "A character-level transformer trained from scratch.",
        tags: &["Python", "PyTorch", "CUDA"],
        details: &[
            "Decoder-only transformer, 6 layers, 6 heads, 384-dim embeddings.",
            "Trained on a 1M character corpus with a 256 token context.",
            "Byte-level tokenizer, AdamW with cosine decay, dropout 0.2.",
            "Sampling supports temperature and top-k.",
        ],
        link: ProjectLink::Url("github.com/LukasKanopka"),
    },
    Project {
        title: "Swim Analytics",
        summary: "Stroke and split analysis from race footage.",
        tags: &["FastAPI", "React", "PostgreSQL"],
        details: &[
            "Upload race video, get per-lap splits and stroke rates.",
            "FastAPI backend with background workers; React dashboard.",
        ],
        link: ProjectLink::DemoPending,
    },
    Project {
        title: "Portfolio CLI",
        summary: "This site, as a terminal.",
        tags: &["Rust", "ratatui"],
        details: &[
            "A simulated shell with a scripted intro, seven themes and",
            "a contact form that never touches the network.",
        ],
        link: ProjectLink::ComingSoon,
    },
];
