/*!
 * Edit distances.
 *
 * Search candidates are ranked with substitutions weighted at 2, so a
 * substitution never beats a deletion plus an insertion. Review ordering
 * uses the plain unit-cost distance.
 */

/// Edit distance with substitution cost 2 and insertion/deletion cost 1
pub fn weighted_edit_distance(a: &str, b: &str) -> usize {
    levenshtein_with_cost(a, b, 2)
}

/// Edit distance with every operation costing 1
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein_with_cost(a, b, 1)
}

fn levenshtein_with_cost(a: &str, b: &str, substitution_cost: usize) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr_row[0] = i;

        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { substitution_cost };

            curr_row[j] = (prev_row[j] + 1)                  // deletion
                .min(curr_row[j - 1] + 1)                    // insertion
                .min(prev_row[j - 1] + cost);                // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
