use crate::domain::{digits_only, OkvedIndex, OkvedNode};

/// Flattens the forest into a digit-code index.
///
/// Nodes are visited in pre-order: a node before its children, siblings and
/// roots in listed order. When two nodes share the same digit code the one
/// visited later wins.
pub fn flatten_tree(roots: &[OkvedNode]) -> OkvedIndex {
    let mut index = OkvedIndex::new();
    let mut stack: Vec<&OkvedNode> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if let Some((code, name)) = node.entry() {
            let digits = digits_only(code);
            if !digits.is_empty() {
                index.insert(digits, name.to_string());
            }
        }
        stack.extend(node.items.iter().rev());
    }

    index
}

#[cfg(test)]
mod tests {
    use super::flatten_tree;
    use crate::domain::OkvedNode;

    #[test]
    fn flatten_strips_separators_from_codes() {
        let tree = vec![OkvedNode::new("01.11.1", "Wheat")];
        let index = flatten_tree(&tree);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("01111"), Some("Wheat"));
    }

    #[test]
    fn flatten_visits_nested_children() {
        let tree = vec![OkvedNode::new("01", "Crops").with_items(vec![
            OkvedNode::new("01.1", "Annual").with_items(vec![OkvedNode::new("01.11", "Grain")]),
            OkvedNode::new("01.2", "Perennial"),
        ])];
        let index = flatten_tree(&tree);
        assert_eq!(index.len(), 4);
        assert_eq!(index.get("01"), Some("Crops"));
        assert_eq!(index.get("0111"), Some("Grain"));
        assert_eq!(index.get("012"), Some("Perennial"));
    }

    #[test]
    fn flatten_skips_unlabeled_nodes_but_keeps_their_children() {
        let section = OkvedNode {
            code: Some("A".to_string()),
            name: Some("Section A".to_string()),
            items: vec![OkvedNode {
                code: None,
                name: Some("Group without code".to_string()),
                items: vec![OkvedNode::new("02", "Forestry")],
            }],
        };
        let index = flatten_tree(&[section]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("02"), Some("Forestry"));
    }

    #[test]
    fn flatten_later_preorder_visit_wins() {
        let tree = vec![
            OkvedNode::new("10", "First").with_items(vec![OkvedNode::new("1.0", "Child")]),
            OkvedNode::new("10.", "Last"),
        ];
        let index = flatten_tree(&tree);
        assert_eq!(index.get("10"), Some("Last"));

        let child = OkvedNode::new("1-0", "Child");
        let nested = vec![OkvedNode::new("10", "Parent").with_items(vec![child])];
        assert_eq!(flatten_tree(&nested).get("10"), Some("Child"));
    }

    #[test]
    fn flatten_empty_forest() {
        assert!(flatten_tree(&[]).is_empty());
    }
}
