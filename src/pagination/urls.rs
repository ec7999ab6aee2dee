use urlencoding::encode;

use super::config::PageSize;
use crate::domain::GroupFilter;

/// Query parameters that survive page navigation
#[derive(Debug, Clone, Copy)]
pub struct PageLink {
    pub group: GroupFilter,
    pub page_size: PageSize,
    pub viewport_width: Option<u32>,
}

impl PageLink {
    /// Link to the first page, used by the group selector and size selector
    pub fn base_url(&self, path: &str) -> String {
        let mut url = format!("{}?group={}", path, encode(self.group.value()));
        if self.page_size != PageSize::default() {
            url.push_str(&format!("&page_size={}", self.page_size));
        }
        if let Some(width) = self.viewport_width {
            url.push_str(&format!("&vw={}", width));
        }
        url
    }

    pub fn page_url(&self, path: &str, page: usize) -> String {
        build_paginated_url_with_params(&self.base_url(path), page)
    }
}

/// Build paginated URL with &page= or ?page= based on existing params
pub fn build_paginated_url_with_params(base_url: &str, page: usize) -> String {
    if is_first_page(page) {
        base_url.to_string()
    } else {
        let separator = determine_separator(base_url);
        format!("{}{}page={}", base_url, separator, page)
    }
}

fn is_first_page(page: usize) -> bool {
    page == 0
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_page_param() {
        assert_eq!(build_paginated_url_with_params("/", 0), "/");
        assert_eq!(build_paginated_url_with_params("/", 2), "/?page=2");
        assert_eq!(build_paginated_url_with_params("/?group=x", 1), "/?group=x&page=1");
    }

    #[test]
    fn links_keep_group_size_and_viewport() {
        let link = PageLink {
            group: GroupFilter::Nineteen,
            page_size: PageSize::TwentyFive,
            viewport_width: Some(800),
        };
        assert_eq!(
            link.page_url("/", 3),
            "/?group=Grupo%20das%2019&page_size=25&vw=800&page=3"
        );

        let link = PageLink {
            group: GroupFilter::Eighteen,
            page_size: PageSize::Ten,
            viewport_width: None,
        };
        assert_eq!(link.base_url("/"), "/?group=Grupo%20das%2018");
    }
}
