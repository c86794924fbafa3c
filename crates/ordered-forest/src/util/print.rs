use crate::arena::Arena;
use crate::types::Node;

/// Debug printer shared by all variants.
///
/// `label` renders the variant-specific part of a node line (height, color).
/// Recursive; meant for small trees in tests and debugging sessions.
pub fn print<N, F>(arena: &Arena<N>, node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l(), &format!("{tab}  "), label);
            let right = print(arena, n.r(), &format!("{tab}  "), label);
            format!(
                "Node[{i}] {} {{ {} }}\n{tab}L={left}\n{tab}R={right}",
                label(n),
                n.key()
            )
        }
    }
}
