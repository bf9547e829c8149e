//! Walk through every renderer on a small policy edit.
//!
//! Run with: cargo run --example diff_demo

use revision_diff::diff::{
    ChangeType, DiffRow, calculate_char_stats, calculate_diff_stats, compute_line_diff,
    compute_word_diff, generate_side_by_side_diff, generate_unified_diff, group_into_rows,
};

fn main() {
    let old = "Remote Work Policy\n\
               Employees may work remotely two days per week.\n\
               Requests go to the  direct manager.\n\
               Equipment is provided on request.";
    let new = "Remote Work Policy\n\
               Employees may work remotely three days per week.\n\
               Requests go to the  direct manager.\n\
               Equipment is provided on request.\n\
               Exceptions need HR approval.";

    println!("== line diff ==");
    for segment in compute_line_diff(old, new) {
        let marker = match segment.change_type {
            ChangeType::Add => '+',
            ChangeType::Remove => '-',
            ChangeType::Unchanged => ' ',
        };
        println!("{} {}", marker, segment.content);
    }

    println!("\n== word diff of changed pairs ==");
    for row in group_into_rows(&compute_line_diff(old, new)) {
        if let DiffRow::Pair(removed, added) = row
            && removed.len() == 1
            && added.len() == 1
        {
            let mut line = String::new();
            for token in compute_word_diff(&removed[0].content, &added[0].content) {
                match token.change_type {
                    ChangeType::Unchanged => line.push_str(&token.content),
                    ChangeType::Add => line.push_str(&format!("{{+{}+}}", token.content)),
                    ChangeType::Remove => line.push_str(&format!("[-{}-]", token.content)),
                }
            }
            println!("{}", line);
        }
    }

    println!("\n== side by side ==");
    let side = generate_side_by_side_diff(old, new);
    for (left, right) in side.left.iter().zip(&side.right) {
        println!(
            "{:>3} {:<50} | {:>3} {}",
            left.old_line_number.map(|n| n.to_string()).unwrap_or_default(),
            left.old_line.as_deref().unwrap_or_default(),
            right.new_line_number.map(|n| n.to_string()).unwrap_or_default(),
            right.new_line.as_deref().unwrap_or_default()
        );
    }

    println!("\n== unified (context 1) ==");
    println!("{}", generate_unified_diff(old, new, 1));

    println!("\n== stats ==");
    println!("{:?}", calculate_diff_stats(old, new));
    println!("{:?}", calculate_char_stats(old, new));
}
