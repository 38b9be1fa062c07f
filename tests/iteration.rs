use iter_option::{Optional, Slot};
use pretty_assertions::assert_eq;

#[test]
fn empty_yields_nothing() {
	let optional = Optional::<String>::empty();
	assert_eq!(0, optional.iter().count());

	let mut visited = 0;
	for _ in &optional {
		visited += 1;
	}
	assert_eq!(0, visited);
}

#[test]
fn occupied_yields_once() {
	let optional = Optional::of(String::from("42"));
	let items: Vec<&String> = optional.iter().collect();
	assert_eq!(vec![&String::from("42")], items);
}

#[test]
fn owned_iteration_moves_value_out() {
	let optional = Optional::of(vec![1, 2, 3]);
	let items: Vec<Vec<i32>> = optional.into_iter().collect();
	assert_eq!(vec![vec![1, 2, 3]], items);
}

#[test]
fn mutation_through_iteration_is_visible() {
	let mut optional = Optional::of(String::from("42"));
	for value in &mut optional {
		value.push_str("!!");
	}
	assert_eq!("42!!", optional.get().unwrap().as_str());
}

#[test]
fn iterating_pointer_payload() {
	let text = String::from("24");
	let optional = Optional::of(&text);
	for value in &optional {
		assert_eq!("24", value.as_str());
	}
	assert_eq!(1, optional.iter().count());
}

#[test]
fn exhausted_cursor_stays_at_end() {
	let optional = Optional::of(1u8);
	let mut cursor = optional.iter();
	assert_eq!(Some(&1), cursor.next());
	assert!(cursor.is_exhausted());
	assert_eq!(None, cursor.next());
	assert_eq!(None, cursor.next());

	let empty = Optional::<u8>::empty();
	let mut cursor = empty.iter();
	assert!(cursor.is_exhausted());
	assert_eq!(None, cursor.next());
}

#[test]
fn exact_length() {
	let optional = Optional::of('x');
	let mut cursor = optional.iter();
	assert_eq!(1, cursor.len());
	cursor.next();
	assert_eq!(0, cursor.len());
	assert_eq!(0, Optional::<char>::empty().iter().len());
}

#[test]
fn cursor_equality_is_positional() {
	let optional = Optional::of(5u8);
	let begin = optional.iter();
	let mut advanced = optional.iter();
	assert!(begin == advanced);

	advanced.next();
	assert!(begin != advanced);
	let empty = Optional::<u8>::empty();
	assert!(advanced == empty.iter());
}

#[test]
fn cursor_equality_ignores_origin() {
	let left = Optional::of(5u8);
	let right = Optional::of(7u8);
	assert!(left.iter() == right.iter());

	let first_empty = Optional::<u8>::empty();
	let second_empty = Optional::<u8>::empty();
	assert!(first_empty.iter() == second_empty.iter());
	assert!(left.iter() != first_empty.iter());

	let mut exhausted = left.iter();
	exhausted.next();
	assert!(exhausted == second_empty.iter());
}

#[test]
fn mutable_cursor_equality() {
	let mut optional = Optional::of(5u8);
	let mut cursor = optional.iter_mut();
	assert!(cursor != Optional::<u8>::empty().iter_mut());
	cursor.next();
	assert!(cursor == Optional::<u8>::empty().iter_mut());
}

#[test]
fn slot_iteration() {
	let mut filled = Slot::<String, false>::vacant().emplace("s");
	for value in &mut filled {
		value.push('!');
	}
	assert_eq!(vec![&String::from("s!")], filled.iter().collect::<Vec<_>>());

	let vacant = Slot::<String, false>::vacant();
	assert_eq!(0, vacant.iter().count());
	assert_eq!(0, vacant.into_iter().count());
}
