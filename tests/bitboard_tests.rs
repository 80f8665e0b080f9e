use broadside::{BitBoard, BitBoardError, BB};

#[test]
fn test_insert_contains_remove() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    assert!(bb.insert(1, 1).unwrap());
    assert!(!bb.insert(1, 1).unwrap());
    assert!(bb.contains(1, 1));
    assert_eq!(bb.len(), 1);

    assert!(bb.remove(1, 1).unwrap());
    assert!(!bb.remove(1, 1).unwrap());
    assert!(!bb.contains(1, 1));
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BB::new();
    assert_eq!(
        bb.insert(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(!bb.contains(0, 10));
    assert!(bb.remove(3, 12).is_err());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
    assert!(BitBoard::<u16, 4>::from_cells([(4, 0)]).is_err());
}

#[test]
fn test_set_operations_stay_on_board() {
    let full = BB::full();
    assert_eq!(full.len(), 100);
    assert!((!full).is_empty());

    let a = BB::from_cells([(0, 0), (5, 5)]).unwrap();
    let b = BB::from_cells([(5, 5), (9, 9)]).unwrap();
    assert!(a.intersects(&b));
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![(5, 5)]);
    assert_eq!((a | b).len(), 3);
    assert_eq!((!a).len(), 98);
    assert!(!(!a).contains(0, 0));
}
