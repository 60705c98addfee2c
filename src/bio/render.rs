//! Bio fragment renderer.
//!
//! Pure mapping from [`SiteMetadata`] to a fixed markup tree:
//!
//! ```html
//! <div class="mb-6">
//!   <a style="box-shadow: none" href="https://twitter.com/{twitter}"
//!      class="no-underline flex items-center py-2 text-sm">
//!     <span>Written by <strong>{author}.</strong></span>
//!   </a>
//! </div>
//! ```
//!
//! The handle is concatenated as-is unless [`HandleEncoding::Percent`] is set.

use super::error::Result;
use super::markup::Element;
use super::query::SiteMetadata;
use crate::config::HandleEncoding;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const TWITTER_BASE: &str = "https://twitter.com/";

const CONTAINER_CLASS: &str = "mb-6";
const LINK_CLASS: &str = "no-underline flex items-center py-2 text-sm";
const LINK_STYLE: &str = "box-shadow: none";

/// RFC 3986 unreserved characters stay literal.
const HANDLE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub encoding: HandleEncoding,
}

/// A rendered bio: the markup tree plus accessors used by hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    root: Element,
}

impl Fragment {
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Link target of the anchor.
    pub fn href(&self) -> Option<&str> {
        self.root.find("a").and_then(|a| a.get_attr("href"))
    }

    /// Text of the `<strong>` element.
    pub fn emphasis(&self) -> Option<String> {
        self.root.find("strong").map(Element::text_content)
    }

    /// Visible text, unescaped.
    pub fn text(&self) -> String {
        self.root.text_content()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        self.root.write_html(&mut out);
        out
    }
}

/// Build the link target for a handle.
pub fn twitter_url(handle: &str, encoding: HandleEncoding) -> String {
    match encoding {
        HandleEncoding::Raw => format!("{TWITTER_BASE}{handle}"),
        HandleEncoding::Percent => {
            format!("{TWITTER_BASE}{}", utf8_percent_encode(handle, HANDLE_SEGMENT))
        }
    }
}

/// Render the bio for `meta`.
///
/// Fails only when `social` is absent; an empty handle still renders.
pub fn render(meta: &SiteMetadata, options: &RenderOptions) -> Result<Fragment> {
    let social = meta.social()?;

    let span = Element::new("span")
        .text("Written by ")
        .child(Element::new("strong").text(format!("{}.", meta.author)));

    let link = Element::new("a")
        .attr("style", LINK_STYLE)
        .attr("href", twitter_url(&social.twitter, options.encoding))
        .attr("class", LINK_CLASS)
        .child(span);

    let root = Element::new("div").attr("class", CONTAINER_CLASS).child(link);

    Ok(Fragment { root })
}
