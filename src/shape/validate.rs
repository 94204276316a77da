//! Independent red-black validation
//!
//! Recomputes black-height and node count from the leaves up, ignoring the
//! values cached on each node, then compares.

use super::{Color, ShapeError, ShapeNode};

/// Read-only view over a binary colored node
///
/// Implemented by cached shapes and owned output nodes so both can be
/// validated by the same walk.
pub trait ShapeView {
    /// Node color
    fn view_color(&self) -> Color;

    /// Black-height stored on the node
    fn view_black_height(&self) -> usize;

    /// Node count stored on the node
    fn view_node_count(&self) -> usize;

    /// Left child, if present
    fn view_left(&self) -> Option<&Self>;

    /// Right child, if present
    fn view_right(&self) -> Option<&Self>;
}

impl ShapeView for ShapeNode {
    fn view_color(&self) -> Color {
        self.color()
    }

    fn view_black_height(&self) -> usize {
        self.black_height()
    }

    fn view_node_count(&self) -> usize {
        self.node_count()
    }

    fn view_left(&self) -> Option<&Self> {
        self.left().as_deref()
    }

    fn view_right(&self) -> Option<&Self> {
        self.right().as_deref()
    }
}

/// Validate a subtree, returning its black-height
///
/// `None` is the sentinel and validates at height 1.
pub fn validate<S: ShapeView>(node: Option<&S>) -> Result<usize, ShapeError> {
    check(node).map(|(black_height, _)| black_height)
}

/// Validate a complete tree: [`validate`] plus a black root
pub fn validate_root<S: ShapeView>(root: Option<&S>) -> Result<usize, ShapeError> {
    if root.map_or(false, |node| node.view_color() == Color::Red) {
        return Err(ShapeError::RedRoot);
    }
    validate(root)
}

fn check<S: ShapeView>(node: Option<&S>) -> Result<(usize, usize), ShapeError> {
    let Some(node) = node else {
        return Ok((1, 0));
    };

    let (left_height, left_count) = check(node.view_left())?;
    let (right_height, right_count) = check(node.view_right())?;

    if left_height != right_height {
        return Err(ShapeError::HeightMismatch {
            left: left_height,
            right: right_height,
        });
    }

    if node.view_color() == Color::Red {
        let red_child = [node.view_left(), node.view_right()]
            .into_iter()
            .flatten()
            .any(|child| child.view_color() == Color::Red);
        if red_child {
            return Err(ShapeError::RedChildOfRed);
        }
    }

    let black_height = left_height + node.view_color().height_contribution();
    if black_height != node.view_black_height() {
        return Err(ShapeError::StaleBlackHeight {
            recorded: node.view_black_height(),
            actual: black_height,
        });
    }

    let node_count = left_count + right_count + 1;
    if node_count != node.view_node_count() {
        return Err(ShapeError::StaleNodeCount {
            recorded: node.view_node_count(),
            actual: node_count,
        });
    }

    Ok((black_height, node_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Color::{Black, Red};
    use std::rc::Rc;

    /// Unchecked node for feeding the validator broken trees
    #[derive(Debug)]
    struct Raw {
        color: Color,
        left: Option<Box<Raw>>,
        right: Option<Box<Raw>>,
    }

    impl Raw {
        fn new(color: Color, left: Option<Raw>, right: Option<Raw>) -> Self {
            Self {
                color,
                left: left.map(Box::new),
                right: right.map(Box::new),
            }
        }

        fn leaf(color: Color) -> Self {
            Self::new(color, None, None)
        }

        fn height(&self) -> usize {
            self.left.as_ref().map_or(1, |l| l.height()) + self.color.height_contribution()
        }

        fn count(&self) -> usize {
            1 + self.left.as_ref().map_or(0, |l| l.count())
                + self.right.as_ref().map_or(0, |r| r.count())
        }
    }

    impl ShapeView for Raw {
        fn view_color(&self) -> Color {
            self.color
        }
        fn view_black_height(&self) -> usize {
            self.height()
        }
        fn view_node_count(&self) -> usize {
            self.count()
        }
        fn view_left(&self) -> Option<&Self> {
            self.left.as_deref()
        }
        fn view_right(&self) -> Option<&Self> {
            self.right.as_deref()
        }
    }

    #[test]
    fn test_sentinel_is_valid() {
        assert_eq!(validate::<Raw>(None), Ok(1));
        assert_eq!(validate_root::<Raw>(None), Ok(1));
    }

    #[test]
    fn test_uneven_black_paths() {
        let tree = Raw::new(
            Black,
            Some(Raw::new(Black, Some(Raw::leaf(Black)), None)),
            Some(Raw::leaf(Red)),
        );
        assert!(matches!(
            validate(Some(&tree)),
            Err(ShapeError::HeightMismatch { .. })
        ));
    }

    #[test]
    fn test_red_under_red() {
        let tree = Raw::new(
            Black,
            Some(Raw::leaf(Black)),
            Some(Raw::new(Red, Some(Raw::leaf(Black)), Some(Raw::leaf(Red)))),
        );
        assert!(validate(Some(&tree)).is_err());

        let tree = Raw::new(Red, Some(Raw::leaf(Red)), Some(Raw::leaf(Red)));
        assert_eq!(validate(Some(&tree)), Err(ShapeError::RedChildOfRed));
    }

    #[test]
    fn test_red_root_rejected_only_at_top() {
        let tree = Raw::new(Red, Some(Raw::leaf(Black)), Some(Raw::leaf(Black)));
        assert_eq!(validate(Some(&tree)), Ok(2));
        assert_eq!(validate_root(Some(&tree)), Err(ShapeError::RedRoot));
    }

    #[test]
    fn test_valid_mixed_tree() {
        let tree = Raw::new(
            Black,
            Some(Raw::new(Black, Some(Raw::leaf(Black)), Some(Raw::leaf(Black)))),
            Some(Raw::new(
                Black,
                Some(Raw::leaf(Black)),
                Some(Raw::new(Red, Some(Raw::leaf(Black)), Some(Raw::leaf(Black)))),
            )),
        );
        assert_eq!(validate_root(Some(&tree)), Ok(4));
    }

    #[test]
    fn test_shape_node_validates() {
        let child = Some(Rc::new(ShapeNode::leaf(Red)));
        let root = ShapeNode::new(Black, child.clone(), child).unwrap();
        assert_eq!(validate_root(Some(&root)), Ok(2));
    }
}
