use crate::collect::CollectedNames;
use crate::identifier::{create_identifier, Identifier, IdentifierIndex};
use indexmap::IndexMap;
use tracing::{debug, debug_span};

/// Namespace identifier for each imported module path, in discovery order.
pub type ModuleMap = IndexMap<String, Identifier>;

/// Mints one namespace identifier per module path. Names never collide with a
/// collected name, a reserved word, or each other since the index only moves
/// forward.
pub fn assign_import_names(collected: &CollectedNames) -> ModuleMap {
  let span = debug_span!("assign_import_names", modules = collected.module_paths.len());
  let _enter = span.enter();

  let mut index = IdentifierIndex::INITIAL;
  let mut map = ModuleMap::with_capacity(collected.module_paths.len());
  for path in &collected.module_paths {
    let (name, next) = create_identifier(index, &collected.used_names);
    index = next;
    debug!(path = %path, name = %name, "assigned import namespace");
    map.insert(path.clone(), name);
  }
  map
}
