//! Outbound search links for a suggestion on the supported job boards.

use crate::filter::effective_location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobBoard {
    LinkedIn,
    Naukri,
    Indeed,
    Apna,
}

impl JobBoard {
    pub const ALL: [JobBoard; 4] = [
        JobBoard::LinkedIn,
        JobBoard::Naukri,
        JobBoard::Indeed,
        JobBoard::Apna,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JobBoard::LinkedIn => "LinkedIn",
            JobBoard::Naukri => "Naukri",
            JobBoard::Indeed => "Indeed",
            JobBoard::Apna => "Apna",
        }
    }

    /// Search URL for `title` in `location`. Both values are percent-encoded.
    pub fn search_url(self, title: &str, location: &str) -> String {
        let title = urlencoding::encode(title);
        let location = urlencoding::encode(location);
        match self {
            JobBoard::LinkedIn => format!(
                "https://www.linkedin.com/jobs/search/?keywords={title}&location={location}"
            ),
            JobBoard::Naukri => format!("https://www.naukri.com/{title}-jobs-in-{location}"),
            JobBoard::Indeed => format!("https://in.indeed.com/jobs?q={title}&l={location}"),
            JobBoard::Apna => format!("https://apna.co/jobs?keyword={title}&location={location}"),
        }
    }
}

/// One `(board, url)` pair per supported board.
pub fn search_links(title: &str, location: &str) -> Vec<(JobBoard, String)> {
    let location = effective_location(location);
    JobBoard::ALL
        .iter()
        .map(|board| (*board, board.search_url(title, location)))
        .collect()
}
