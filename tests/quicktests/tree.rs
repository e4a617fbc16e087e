use avl_bst::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a multiset model (key -> count).
/// After every single operation the tree must still be a valid AVL tree and hold
/// exactly the keys the model holds.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut BTreeMap<K, usize>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                *model.entry(k.clone()).or_default() += 1;
            }
            Op::Delete(k) => {
                let deleted = tree.delete(k);
                match model.get_mut(k) {
                    Some(count) => {
                        if deleted.as_ref() != Some(k) {
                            return false;
                        }
                        *count -= 1;
                        if *count == 0 {
                            model.remove(k);
                        }
                    }
                    None if deleted.is_some() => return false,
                    None => {}
                }
            }
            Op::Search(k) => {
                if tree.search(k) != model.contains_key(k) {
                    return false;
                }
            }
        }

        if tree.check().is_err() || tree.len() != model.values().sum::<usize>() {
            return false;
        }
    }

    true
}

/// Flattens the model into the sorted sequence the tree should yield.
fn expected_inorder<K: Clone>(model: &BTreeMap<K, usize>) -> Vec<K> {
    model
        .iter()
        .flat_map(|(k, count)| std::iter::repeat(k.clone()).take(*count))
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model) && tree.inorder_traversal() == expected_inorder(&model)
}

#[quickcheck]
fn fuzz_multiple_operations_u16(ops: Vec<Op<u16>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model) && tree.inorder_traversal() == expected_inorder(&model)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.delete(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    tree.check().is_ok()
        && deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.inorder_traversal() == sorted && tree.iter().len() == sorted.len()
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let n = tree.len() as f64;

    tree.height() as f64 <= 1.45 * (n + 2.0).log2()
}

#[quickcheck]
fn ascending_height_is_logarithmic(n: u16) -> bool {
    let n = usize::from(n % 4096);
    let tree: Tree<_> = (0..n).collect();
    let bound = 1.45 * (n as f64 + 2.0).log2();

    tree.height() as f64 <= bound && tree.check().is_ok()
}

#[quickcheck]
fn delete_absent_is_idempotent(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != absent).collect();
    let before = tree.inorder_traversal();

    tree.delete(&absent).is_none() && tree.inorder_traversal() == before && tree.check().is_ok()
}

#[quickcheck]
fn size_is_conserved(xs: HashSet<i16>, take: usize) -> bool {
    let xs: Vec<_> = xs.into_iter().collect();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let m = if xs.is_empty() { 0 } else { take % (xs.len() + 1) };
    for x in &xs[..m] {
        tree.delete(x);
    }

    tree.inorder_traversal().len() == xs.len() - m && tree.len() == xs.len() - m
}
