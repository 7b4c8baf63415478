use crate::layout::Layout;

/// Makes the last stack an exact copy of the second-to-last one, shifted by one spacing.
///
/// For every row, the viewer of the last stack is overwritten with its left neighbour moved
/// right by `layout.spacing()`, focus included. The overwritten viewers are not re-checked
/// for line of sight. Layouts with fewer than two stacks are left alone.
pub fn enforce_periodicity(layout: &mut Layout) {
    let num_stacks = layout.shape.num_stacks;
    if num_stacks < 2 || layout.len() < layout.shape.len() {
        return;
    }
    let spacing = layout.spacing();
    for i in 0..layout.shape.num_per_stack {
        let this_idx = (i + 1) * num_stacks - 1;
        layout[this_idx] = layout[this_idx - 1].shifted(spacing);
    }
}
