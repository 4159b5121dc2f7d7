//! Path predicate assembly from include and exclude patterns

use crate::error::Result;
use docket_openapi::PathSelector;

/// Pattern used when a group lists no include paths
pub const MATCH_ALL: &str = "/**";

/// Paths matching any include pattern and no exclude pattern.
///
/// An empty include list includes everything. Exclusion always wins.
pub fn assemble_path_selector(include: &[String], exclude: &[String]) -> Result<PathSelector> {
    let included = if include.is_empty() {
        vec![PathSelector::ant(MATCH_ALL)?]
    } else {
        include
            .iter()
            .map(|pattern| PathSelector::ant(pattern))
            .collect::<docket_openapi::Result<Vec<_>>>()?
    };
    let excluded = exclude
        .iter()
        .map(|pattern| PathSelector::ant(pattern))
        .collect::<docket_openapi::Result<Vec<_>>>()?;

    Ok(PathSelector::and([
        PathSelector::or(included),
        PathSelector::not(PathSelector::or(excluded)),
    ]))
}
