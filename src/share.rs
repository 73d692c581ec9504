use crate::error::Result;
use url::Url;

const TITLE_PARAM: &str = "title";
const DESCRIPTION_PARAM: &str = "description";
const SHARED_BY_PARAM: &str = "sharedBy";

/// Personalization carried in a shareable assessment link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub shared_by: Option<String>,
}

impl ShareParams {
    pub fn is_shared_session(&self) -> bool {
        self.shared_by.is_some() || self.title.is_some()
    }
}

/// Builds `<origin>/?title=..&description=..&sharedBy=..`, omitting empty
/// fields and the `?` when nothing is set.
pub fn generate_share_url(base_url: &str, params: &ShareParams) -> Result<String> {
    let mut url = Url::parse(base_url)?.join("/")?;
    url.set_query(None);
    url.set_fragment(None);

    let pairs = [
        (TITLE_PARAM, &params.title),
        (DESCRIPTION_PARAM, &params.description),
        (SHARED_BY_PARAM, &params.shared_by),
    ];
    let present = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value))
        })
        .collect::<Vec<_>>();

    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }
    Ok(url.to_string())
}

/// Reads the personalization params from a link. The first occurrence of a
/// key wins; an empty value reads as absent.
pub fn parse_share_params(link: &str) -> Result<ShareParams> {
    let url = Url::parse(link)?;
    let first = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    };
    Ok(ShareParams {
        title: first(TITLE_PARAM),
        description: first(DESCRIPTION_PARAM),
        shared_by: first(SHARED_BY_PARAM),
    })
}
