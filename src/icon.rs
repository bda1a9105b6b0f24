/// Inline SVG icons, drawn as 24x24 stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    User,
    Code,
    Folder,
    Briefcase,
    Email,
    Download,
    ExternalLink,
    Github,
    Linkedin,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Self::Home,
        Self::User,
        Self::Code,
        Self::Folder,
        Self::Briefcase,
        Self::Email,
        Self::Download,
        Self::ExternalLink,
        Self::Github,
        Self::Linkedin,
        Self::Menu,
        Self::Close,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z M9 22V12h6v10",
            Self::User => "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2 M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            Self::Code => "M16 18l6-6-6-6 M8 6l-6 6 6 6",
            Self::Folder => {
                "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"
            }
            Self::Briefcase => {
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z \
                 M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"
            }
            Self::Email => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 6l-10 7L2 6"
            }
            Self::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3",
            Self::ExternalLink => {
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6 M15 3h6v6 M10 14L21 3"
            }
            Self::Github => {
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 \
                 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 \
                 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 \
                 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
            }
            Self::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z \
                 M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"
            }
            Self::Menu => "M3 12h18 M3 6h18 M3 18h18",
            Self::Close => "M18 6L6 18 M6 6l12 12",
        }
    }
}
