/// Quotation mark used to protect embedded delimiters
pub const QUOTE: char = '"';

/// Result of splitting one raw line with [split_quoted].
#[derive(Debug, Clone, PartialEq)]
pub struct QuotedSplit {
    fields: Vec<String>,
    balanced: bool,
}

impl QuotedSplit {
    /// Get the reconstructed fields.
    pub fn fields(&self) -> &Vec<String> {
        &self.fields
    }

    /// Take ownership of the reconstructed fields.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// False when the line carried an odd number of quotation marks. The fields are still
    /// returned but may be split incorrectly around the unpaired mark.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Get the first field, which identifies the entry in diagnostics.
    pub fn first(&self) -> &str {
        self.fields.first().map(|f| f.as_str()).unwrap_or("")
    }
}

/// Split a line on `delimiter`, keeping delimiters that appear between a pair of quotation marks
/// as part of the field.
///
/// The line is first split on every delimiter. Pieces holding exactly one quotation mark are
/// paired in order of appearance, first with second, third with fourth, and every run from an
/// opening piece to its closing piece is joined back into a single field. A field wrapped in
/// quotation marks is returned without them.
///
/// # Examples
/// ```
/// use pharmacy_counting::splitter::split_quoted;
/// let split = split_quoted("4,Lee,Ann,\"Vitamin, D\",7.50\n", ',');
/// assert_eq!(split.fields(), &vec!["4", "Lee", "Ann", "Vitamin, D", "7.50"]);
/// assert!(split.is_balanced());
/// ```
pub fn split_quoted(line: &str, delimiter: char) -> QuotedSplit {
    let line = strip_line_terminator(line);
    let pieces: Vec<&str> = line.split(delimiter).collect();
    let quotes = line.matches(QUOTE).count();
    let balanced = quotes % 2 == 0;

    if quotes == 0 {
        return QuotedSplit {
            fields: pieces.into_iter().map(String::from).collect(),
            balanced,
        };
    }

    let markers: Vec<usize> = pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.matches(QUOTE).count() == 1)
        .map(|(i, _)| i)
        .collect();
    // an odd trailing marker stays unpaired
    let mut spans = markers
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .peekable();

    let separator = delimiter.to_string();
    let mut fields = Vec::with_capacity(pieces.len());
    let mut i = 0;
    while i < pieces.len() {
        match spans.peek() {
            Some(&(open, close)) if open == i => {
                let joined = pieces[open..=close].join(separator.as_str());
                fields.push(unquote(&joined).to_string());
                spans.next();
                i = close + 1;
            }
            _ => {
                let piece = pieces[i];
                // a malformed piece such as `"""` is kept as is
                if piece.matches(QUOTE).count() % 2 == 0 {
                    fields.push(unquote(piece).to_string());
                } else {
                    fields.push(piece.to_string());
                }
                i += 1;
            }
        }
    }

    QuotedSplit {
        fields,
        balanced,
    }
}

fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped),
        None => line,
    }
}

fn unquote(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE) {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
