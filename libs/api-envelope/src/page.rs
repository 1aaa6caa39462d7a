use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, EnvelopeResult};

/// One page of a larger, offset-paginated result set.
///
/// `total_pages`, `has_next` and `has_previous` are derived by [`PageResponse::of`]
/// and are always consistent with the other fields. Deserialization recomputes
/// them and rejects input whose metadata disagrees.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPage<T>")]
pub struct PageResponse<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u32,
    has_next: bool,
    has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Build a page and derive its metadata.
    ///
    /// `page` is zero-based. Fails when `size` is zero or when the page count
    /// does not fit in `u32`. `content.len() <= size` is a caller contract
    /// and is not checked.
    pub fn of(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> EnvelopeResult<Self> {
        let total_pages = total_pages(total_elements, size)?;
        Ok(Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            has_next: u64::from(page) + 1 < u64::from(total_pages),
            has_previous: page > 0,
        })
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Map items while preserving page metadata (domain -> DTO mapping).
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u32,
    has_next: bool,
    has_previous: bool,
}

impl<T> TryFrom<RawPage<T>> for PageResponse<T> {
    type Error = EnvelopeError;

    fn try_from(raw: RawPage<T>) -> Result<Self, Self::Error> {
        let page = Self::of(raw.content, raw.page, raw.size, raw.total_elements)?;
        if page.total_pages != raw.total_pages
            || page.has_next != raw.has_next
            || page.has_previous != raw.has_previous
        {
            tracing::debug!(
                page = raw.page,
                size = raw.size,
                total_elements = raw.total_elements,
                "rejecting page with inconsistent metadata"
            );
            return Err(EnvelopeError::InconsistentPageMetadata {
                page: raw.page,
                size: raw.size,
                total_elements: raw.total_elements,
            });
        }
        Ok(page)
    }
}

fn total_pages(total_elements: u64, size: u32) -> EnvelopeResult<u32> {
    if size == 0 {
        tracing::debug!(total_elements, "rejecting zero page size");
        return Err(EnvelopeError::ZeroPageSize);
    }
    let pages = total_elements.div_ceil(u64::from(size));
    u32::try_from(pages).map_err(|_| {
        tracing::debug!(total_elements, size, "page count exceeds u32");
        EnvelopeError::TotalPagesOverflow {
            total_elements,
            size,
        }
    })
}
