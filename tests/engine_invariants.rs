use lcsdiff::{
    engine::{mark_lcs_into, split_point},
    lengths::lcs_lengths,
    span::Span,
    traits::Reversed,
    Membership,
};

#[test]
fn split_point_preserves_total_length() {
    let x = b"ABCBDAB";
    let y = b"BDCABA";
    let (lo, hi) = Span::full(x.len()).halve();
    let forward = lcs_lengths(lo.slice(x), &y[..]);
    let backward = lcs_lengths(&Reversed(hi.slice(x)), &Reversed(&y[..]));
    let cut = split_point(&forward, &backward);

    let left = lcs_lengths(lo.slice(x), &y[..cut]);
    let right = lcs_lengths(hi.slice(x), &y[cut..]);
    let whole = lcs_lengths(&x[..], &y[..]);
    assert_eq!(left.last().unwrap() + right.last().unwrap(), *whole.last().unwrap());
}

#[test]
fn split_point_ties_go_left() {
    // every cut scores 1; the leftmost wins
    assert_eq!(split_point(&[0, 1, 1], &[0, 0, 1]), 0);
    assert_eq!(split_point(&[0, 0, 0], &[0, 0, 0]), 0);
}

#[test]
fn untouched_positions_stay_unmarked() {
    let x = b"AAXAA";
    let y = b"BXB";
    let mut xm = Membership::new(x.len());
    let mut ym = Membership::new(y.len());
    mark_lcs_into(&x[..], &y[..], Span::new(1, 4), Span::new(0, 3), &mut xm, &mut ym);
    assert_eq!(xm.as_slice(), &[false, false, true, false, false]);
    assert_eq!(ym.as_slice(), &[false, true, false]);
}

#[test]
fn empty_spans_are_no_ops() {
    let x = b"AB";
    let y = b"AB";
    let mut xm = Membership::new(2);
    let mut ym = Membership::new(2);
    mark_lcs_into(&x[..], &y[..], Span::new(1, 1), Span::full(2), &mut xm, &mut ym);
    mark_lcs_into(&x[..], &y[..], Span::full(2), Span::new(2, 2), &mut xm, &mut ym);
    assert_eq!(xm.count(), 0);
    assert_eq!(ym.count(), 0);
}
