use crate::model::{GradeScale, Gradebook, LETTERS, Letter};

/// Count of assigned grades per letter, in A..F order. Ungraded students do
/// not contribute.
pub fn distribution(book: &Gradebook, scale: &GradeScale) -> [(Letter, usize); 5] {
    let mut counts = LETTERS.map(|letter| (letter, 0));
    for student in book.roster() {
        if let Some(grade) = book.grade_of(student) {
            let letter = grade.letter(scale);
            let slot = counts
                .iter_mut()
                .find(|(l, _)| *l == letter)
                .expect("letter is one of LETTERS");
            slot.1 += 1;
        }
    }
    counts
}
