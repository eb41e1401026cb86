use super::*;
use crate::{nested_list, nested_list::NestedList};
use core::sync::atomic::{AtomicUsize, Ordering};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

type List = NestedList<i32>;

fn atom(x: i32) -> List {
    NestedList::Atom(x)
}

fn arb_tree() -> impl Strategy<Value = List> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(NestedList::Atom),
        Just(NestedList::List(Vec::new())),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(NestedList::List)
    })
}

#[test]
fn navigation_rebuilds_ancestors() {
    let zipper = Zipper::new(nested_list![1, [2, 3], 4]);
    let zipper = zipper.down().unwrap();
    assert_eq!(zipper.node(), &atom(1));
    let zipper = zipper.right().unwrap();
    assert_eq!(zipper.node(), &nested_list![2, 3]);
    let zipper = zipper.down().unwrap();
    assert_eq!(zipper.node(), &atom(2));
    let zipper = zipper.up().unwrap();
    assert_eq!(zipper.node(), &nested_list![2, 3]);
    let zipper = zipper.up().unwrap();
    assert_eq!(zipper.node(), &nested_list![1, [2, 3], 4]);
    assert!(zipper.is_root());
}

#[test]
fn insert_right_then_close() {
    let tree = Zipper::new(nested_list![1, 2, 3])
        .down()
        .and_then(Zipper::right)
        .and_then(|zipper| zipper.insert_right(atom(100)))
        .unwrap()
        .root();
    assert_eq!(tree, nested_list![1, 2, 100, 3]);
}

#[test]
fn remove_focuses_previous_node() {
    let zipper = Zipper::new(nested_list![1, 2, 3])
        .down()
        .and_then(Zipper::right)
        .and_then(|zipper| zipper.insert_right(atom(100)))
        .and_then(Zipper::right)
        .and_then(Zipper::remove)
        .unwrap();
    assert_eq!(zipper.node(), &atom(2));
    assert_eq!(zipper.root(), nested_list![1, 2, 3]);
}

#[test]
fn remove_descends_into_left_sibling() {
    let zipper = Zipper::new(nested_list![1, [2, [3, 4]], 5])
        .down()
        .unwrap()
        .rightmost()
        .remove()
        .unwrap();
    assert_eq!(zipper.node(), &atom(4));
    assert_eq!(zipper.depth(), 3);
    assert_eq!(zipper.root(), nested_list![1, [2, [3, 4]]]);
}

#[test]
fn remove_first_child_focuses_parent() {
    let zipper = Zipper::new(nested_list![[1, 2], 3])
        .down()
        .and_then(Zipper::down)
        .and_then(Zipper::remove)
        .unwrap();
    assert_eq!(zipper.node(), &nested_list![2]);
    assert_eq!(zipper.depth(), 1);
    assert_eq!(zipper.root(), nested_list![[2], 3]);
}

#[test]
fn root_cannot_be_removed() {
    let tree = nested_list![1, 2];
    let err = Zipper::new(tree.clone()).remove().unwrap_err();
    assert_eq!(err.failure(), Failure::RemoveAtRoot);
    assert_eq!(err.recover().root(), tree);
}

#[test]
fn root_has_no_siblings() {
    let tree = nested_list![1];
    let err = Zipper::new(tree.clone()).insert_left(atom(0)).unwrap_err();
    assert_eq!(err.failure(), Failure::SiblingOfRoot);
    let err = err.recover().insert_right(atom(0)).unwrap_err();
    assert_eq!(err.failure(), Failure::SiblingOfRoot);
    assert_eq!(err.recover().root(), tree);
}

#[test]
fn failed_movements_give_the_zipper_back() {
    let zipper = Zipper::new(nested_list![1, [2]]);
    let err = zipper.clone().up().unwrap_err();
    assert_eq!(err.failure(), Failure::NoSuchMovement(Direction::Up));
    assert_eq!(err.previous_state, zipper);

    let first = zipper.down().unwrap();
    let err = first.clone().left().unwrap_err();
    assert_eq!(err.failure(), Failure::NoSuchMovement(Direction::Left));
    assert_eq!(err.recover(), first);

    let err = first.clone().down().unwrap_err();
    assert_eq!(err.failure(), Failure::NoSuchMovement(Direction::Down));
    assert_eq!(err.recover(), first);

    let last = first.right().unwrap();
    let err = last.clone().right().unwrap_err();
    assert_eq!(err.failure(), Failure::NoSuchMovement(Direction::Right));
    assert_eq!(err.recover(), last);

    // Moving sideways from the root is impossible as well.
    let root = Zipper::new(atom(1));
    assert!(root.clone().left().is_err());
    assert!(root.right().is_err());
}

#[test]
fn leftmost_and_rightmost() {
    let zipper = Zipper::new(nested_list![1, 2, 3, 4])
        .down()
        .and_then(Zipper::right)
        .unwrap();
    let rightmost = zipper.clone().rightmost();
    assert_eq!(rightmost.node(), &atom(4));
    assert_eq!(rightmost.left_sibling(), Some(&atom(3)));
    assert_eq!(rightmost.right_sibling(), None);

    let leftmost = rightmost.leftmost();
    assert_eq!(leftmost.node(), &atom(1));
    assert_eq!(leftmost.right_sibling(), Some(&atom(2)));
    assert_eq!(leftmost.clone().leftmost(), leftmost);

    // Walking sibling by sibling ends up in the same place.
    let stepped = leftmost
        .right()
        .and_then(Zipper::right)
        .and_then(Zipper::right)
        .unwrap();
    assert_eq!(stepped, zipper.rightmost());

    let root = Zipper::new(nested_list![1]);
    assert_eq!(root.clone().leftmost(), root);
    assert_eq!(root.clone().rightmost(), root);
}

#[test]
fn edits_are_applied_on_ascent() {
    let zipper = Zipper::new(nested_list![1, [2, 3]])
        .down()
        .and_then(Zipper::right)
        .and_then(Zipper::down)
        .unwrap()
        .update(|node| match node {
            NestedList::Atom(x) => atom(x * 10),
            list => list,
        })
        .insert_left(atom(0))
        .unwrap();
    assert_eq!(zipper.node(), &atom(20));
    assert_eq!(zipper.left_sibling(), Some(&atom(0)));

    let parent = zipper.up().unwrap();
    assert_eq!(parent.node(), &nested_list![0, 20, 3]);

    let mut top = parent.top();
    assert!(top.is_root());
    if let NestedList::List(items) = top.node_mut() {
        items.push(atom(4));
    }
    assert_eq!(top.into_node(), nested_list![1, [0, 20, 3], 4]);
}

#[test]
fn children_inserted_at_both_ends() {
    let tree = Zipper::new(nested_list![[2]])
        .down()
        .unwrap()
        .insert_child(atom(1))
        .append_child(atom(3))
        .root();
    assert_eq!(tree, nested_list![[1, 2, 3]]);

    let tree = Zipper::new(nested_list![[]])
        .down()
        .unwrap()
        .append_child(atom(1))
        .root();
    assert_eq!(tree, nested_list![[1]]);
}

#[test]
fn depth_follows_crumbs() {
    let zipper = Zipper::new(nested_list![[[1]]]);
    assert_eq!(zipper.depth(), 0);
    let zipper = zipper.down().unwrap();
    assert_eq!(zipper.depth(), 1);
    let zipper = zipper.down().and_then(Zipper::down).unwrap();
    assert_eq!(zipper.depth(), 3);
    assert_eq!(zipper.top().depth(), 0);
}

static REBUILDS: AtomicUsize = AtomicUsize::new(0);

/// A nested list which counts how many times it gets rebuilt.
#[derive(Clone, Debug, PartialEq)]
struct Counted(List);
impl Tree for Counted {
    fn into_children(self) -> Result<(Self, Vec<Self>), Self> {
        match self.0.into_children() {
            Ok((shell, children)) => Ok((Counted(shell), children.into_iter().map(Counted).collect())),
            Err(atom) => Err(Counted(atom)),
        }
    }
    fn make(self, children: Vec<Self>) -> Self {
        REBUILDS.fetch_add(1, Ordering::SeqCst);
        Counted(self.0.make(children.into_iter().map(|child| child.0).collect()))
    }
    fn with_children(self, children: Vec<Self>) -> Self {
        REBUILDS.fetch_add(1, Ordering::SeqCst);
        Counted(self.0.with_children(children.into_iter().map(|child| child.0).collect()))
    }
    fn is_branch(&self) -> bool {
        self.0.is_branch()
    }
}

#[test]
fn ancestors_are_rebuilt_lazily() {
    let rebuilds = || REBUILDS.load(Ordering::SeqCst);
    let zipper = Zipper::new(Counted(nested_list![[1, 2], 3]))
        .down()
        .and_then(Zipper::down)
        .and_then(Zipper::right)
        .unwrap()
        .replace(Counted(atom(20)))
        .insert_right(Counted(atom(30)))
        .and_then(Zipper::right)
        .and_then(Zipper::left)
        .unwrap()
        .rightmost()
        .leftmost();
    assert_eq!(zipper.node(), &Counted(atom(1)));
    assert_eq!(rebuilds(), 0);

    // One rebuild per level on the way up.
    let tree = zipper.root();
    assert_eq!(rebuilds(), 2);
    assert_eq!(tree, Counted(nested_list![[1, 20, 30], 3]));

    // Removing a first child rebuilds the parent right away.
    let zipper = Zipper::new(tree)
        .down()
        .and_then(Zipper::down)
        .and_then(Zipper::remove)
        .unwrap();
    assert_eq!(rebuilds(), 3);
    assert_eq!(zipper.node(), &Counted(nested_list![20, 30]));
    assert_eq!(zipper.root(), Counted(nested_list![[20, 30], 3]));
    assert_eq!(rebuilds(), 4);
}

#[test]
fn failure_messages() {
    use alloc::string::ToString;
    let err = Zipper::new(atom(1)).up().unwrap_err();
    assert_eq!(err.to_string(), "cannot move up from the root node");
    assert_eq!(
        Failure::RemoveAtRoot.to_string(),
        "cannot remove the root node of a tree",
    );
}

/// Visits every position reachable from `zipper`'s subtree, calling `f` on each zipper.
fn for_each_position(zipper: Zipper<List>, f: &mut impl FnMut(&Zipper<List>)) {
    f(&zipper);
    let mut child = match zipper.down() {
        Ok(child) => child,
        Err(..) => return,
    };
    loop {
        for_each_position(child.clone(), f);
        child = match child.right() {
            Ok(next) => next,
            Err(..) => return,
        };
    }
}

proptest! {
    #[test]
    fn zip_then_close_is_identity(tree in arb_tree()) {
        prop_assert_eq!(Zipper::new(tree.clone()).root(), tree);
    }

    #[test]
    fn local_moves_are_inverses(tree in arb_tree()) {
        let mut checked = 0_usize;
        for_each_position(Zipper::new(tree), &mut |zipper| {
            if let Ok(child) = zipper.clone().down() {
                assert_eq!(&child.up().unwrap(), zipper);
            }
            if let Ok(right) = zipper.clone().right() {
                assert_eq!(&right.left().unwrap(), zipper);
            }
            if let Ok(left) = zipper.clone().left() {
                assert_eq!(&left.right().unwrap(), zipper);
            }
            checked += 1;
        });
        prop_assert!(checked >= 1);
    }

    #[test]
    fn remove_keeps_sibling_order(
        items in prop::collection::vec(any::<i32>(), 1..10),
        index in any::<prop::sample::Index>(),
    ) {
        let index = index.index(items.len());
        let tree = NestedList::list(items.iter().copied().map(NestedList::Atom));
        let mut zipper = Zipper::new(tree).down().unwrap();
        for _ in 0..index {
            zipper = zipper.right().unwrap();
        }
        let tree = zipper.remove().unwrap().root();

        let mut expected = items;
        expected.remove(index);
        prop_assert_eq!(tree, NestedList::list(expected.into_iter().map(NestedList::Atom)));
    }
}
