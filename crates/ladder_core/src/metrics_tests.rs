use super::*;

#[test]
fn sorted_ladder_has_no_inversions() {
    let ladder = Ladder::from_rankings(&[(1, 2), (3, 4), (5, 6)]).unwrap();
    assert_eq!(inversions(&ladder), 0);
    assert!(is_slot_sorted(&ladder));
    assert_eq!(sortedness(&ladder), 1.0);
    assert_eq!(mean_slot_displacement(&ladder), 0.0);
}

#[test]
fn reversed_ladder_hits_the_inversion_bound() {
    let ladder = Ladder::from_rankings(&[(5, 6), (3, 4), (1, 2)]).unwrap();
    assert_eq!(max_inversions(&ladder), 12);
    assert_eq!(inversions(&ladder), 12);
    assert_eq!(sortedness(&ladder), 0.0);
}

#[test]
fn equal_rankings_never_count_as_inversions() {
    let ladder = Ladder::from_rankings(&[(7, 7), (7, 7), (7, 7)]).unwrap();
    assert_eq!(inversions(&ladder), 0);
    assert_eq!(sortedness(&ladder), 1.0);
}

#[test]
fn within_slot_disorder_is_ignored() {
    // 2 above 1 inside slot 0 is fine; slots are the unit of order
    let ladder = Ladder::from_rankings(&[(2, 1), (3, 4)]).unwrap();
    assert_eq!(inversions(&ladder), 0);
}

#[test]
fn single_slot_is_trivially_sorted() {
    let ladder = Ladder::from_rankings(&[(90, 10)]).unwrap();
    assert_eq!(max_inversions(&ladder), 0);
    assert_eq!(sortedness(&ladder), 1.0);
}

#[test]
fn inversion_bound_survives_very_wide_ladders() {
    // 2n(n-1) for 50k slots is past u32::MAX
    let ladder = Ladder::from_rankings(&vec![(1, 2); 50_000]).unwrap();
    assert_eq!(max_inversions(&ladder), 4_999_900_000);
}

#[test]
fn swapped_slots_displace_everyone_by_one() {
    let ladder = Ladder::from_rankings(&[(3, 4), (1, 2)]).unwrap();
    assert_eq!(inversions(&ladder), 4);
    assert_eq!(mean_slot_displacement(&ladder), 1.0);
}
