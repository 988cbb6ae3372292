const COMPONENTS_PREFIX: &str = "#/components/";

/// Extracts the referenced definition name from a local JSON-Pointer `$ref`.
///
/// Returns the trailing pointer segment (`#/components/schemas/Pet` yields `Pet`),
/// or `None` when the reference is empty, is not anchored at the document root
/// (`#/`), or ends without a segment. `~1` and `~0` escapes are decoded.
///
/// Callers treat `None` as "compile to an unconstrained expression".
pub fn resolve_ref_name(ref_path: &str) -> Option<String> {
  let pointer = ref_path.trim().strip_prefix("#/")?;
  let segment = pointer.rsplit('/').next()?;
  if segment.is_empty() {
    return None;
  }
  Some(decode_pointer_segment(segment))
}

/// Like [`resolve_ref_name`], but only accepts references into one
/// `#/components/<section>/` table, e.g. `parameters` or `responses`.
pub fn resolve_component_ref(ref_path: &str, section: &str) -> Option<String> {
  let name = ref_path
    .trim()
    .strip_prefix(COMPONENTS_PREFIX)?
    .strip_prefix(section)?
    .strip_prefix('/')?;

  if name.is_empty() || name.contains('/') {
    return None;
  }
  Some(decode_pointer_segment(name))
}

fn decode_pointer_segment(segment: &str) -> String {
  segment.replace("~1", "/").replace("~0", "~")
}
