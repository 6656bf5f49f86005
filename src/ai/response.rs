const FENCE: &str = "```";

/// Drops code fence lines from a multi-line answer. Remaining lines are
/// trimmed. Single-line answers are returned unchanged.
pub fn remove_fences(answer: &str) -> String {
    if !answer.contains('\n') {
        return answer.to_string();
    }

    answer
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.starts_with(FENCE))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits an answer into the suggested command and the explanation.
pub fn split_answer(answer: &str) -> (&str, Option<&str>) {
    match answer.split_once('\n') {
        Some((command, rest)) => (command, Some(rest)),
        None => (answer, None),
    }
}
