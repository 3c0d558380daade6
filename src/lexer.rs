use err::FormatError;

/// Conventional sentence start markers.
const SENTENCE_MARKERS: [char; 2] = ['$', '!'];

/// One NMEA sentence split into its header, raw field values and checksum
/// text. Produced by [`tokenize`](fn.tokenize.html); the checksum is filled
/// in afterwards by the top level parse entry point and the message is not
/// mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct NmeaMessage {
    header: String,
    fields: Vec<String>,
    checksum: Option<String>,
}

impl NmeaMessage {
    /// Build a message directly from a header and raw field values, without
    /// going through a sentence string. The checksum starts out absent.
    pub fn new(header: &str, fields: &[&str]) -> Self {
        NmeaMessage {
            header: header.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            checksum: None,
        }
    }

    /// Sentence identifier, e.g. `GPGLL`.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Raw field values in wire order. Omitted fields stay in the list as
    /// empty strings.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The two checksum characters the sentence carried, if any.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_ref().map(|c| c.as_str())
    }

    pub(crate) fn set_checksum(&mut self, checksum: Option<String>) {
        self.checksum = checksum;
    }
}

/// Split `sentence` into a [`NmeaMessage`](struct.NmeaMessage.html) on every
/// occurrence of `separator`.
///
/// The first token, minus its leading `$` or `!` marker, becomes the header;
/// the remaining tokens become the fields. A `*HH` checksum riding in the
/// last field is cut off of the field value, since it is framing rather than
/// data.
pub fn tokenize(sentence: &str, separator: char) -> Result<NmeaMessage, FormatError> {
    if sentence.is_empty() {
        return Err(FormatError::EmptySentence);
    }
    if !sentence.contains(separator) {
        return Err(FormatError::MissingSeparator(separator));
    }

    let mut tokens = sentence.split(separator);
    let head = tokens.next().unwrap_or("");
    let header = match head.chars().next() {
        Some(marker) if SENTENCE_MARKERS.contains(&marker) => &head[marker.len_utf8()..],
        _ => head,
    };
    if header.is_empty() {
        return Err(FormatError::EmptyHeader);
    }

    let mut fields: Vec<String> = tokens.map(|t| t.to_string()).collect();
    if let Some(last) = fields.last_mut() {
        if let Some(star) = last.find('*') {
            last.truncate(star);
        }
    }

    Ok(NmeaMessage {
        header: header.to_string(),
        fields,
        checksum: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_supported_separator() {
        for &sep in &[',', ';', ':'] {
            let sentence = format!(
                "$GPGLL{0}5057.970{0}N{0}01424.326{0}E{0}123456.78{0}A{0}A*6C",
                sep
            );
            let msg = tokenize(&sentence, sep).unwrap();
            assert_eq!(msg.header(), "GPGLL");
            assert_eq!(msg.fields().len(), 7);
            assert_eq!(msg.checksum(), None);
        }
    }

    #[test]
    fn strips_either_sentence_marker() {
        let msg = tokenize("$GPGLL,A", ',').unwrap();
        assert_eq!(msg.header(), "GPGLL");
        let msg = tokenize("!AIVDM,1,1", ',').unwrap();
        assert_eq!(msg.header(), "AIVDM");
    }

    #[test]
    fn keeps_header_without_marker() {
        let msg = tokenize("GPGLL,A", ',').unwrap();
        assert_eq!(msg.header(), "GPGLL");
    }

    #[test]
    fn cuts_checksum_out_of_last_field() {
        let msg = tokenize("$GPMWV,270,R,10.5,N,A*05", ',').unwrap();
        assert_eq!(msg.fields()[4], "A");
    }

    #[test]
    fn cuts_incomplete_checksum_out_of_last_field() {
        let msg = tokenize("$GPMWV,270,R,10.5,N,A*4", ',').unwrap();
        assert_eq!(msg.fields()[4], "A");
    }

    #[test]
    fn keeps_empty_fields() {
        let msg = tokenize("$GPGGA,,,", ',').unwrap();
        assert_eq!(msg.fields(), ["", "", ""]);
    }

    #[test]
    fn rejects_empty_sentence() {
        assert_matches!(tokenize("", ','), Err(FormatError::EmptySentence));
    }

    #[test]
    fn rejects_sentence_without_separator() {
        assert_matches!(
            tokenize("$GPGLL.5057.970", ','),
            Err(FormatError::MissingSeparator(','))
        );
    }

    #[test]
    fn rejects_empty_header() {
        assert_matches!(tokenize("$,A,B", ','), Err(FormatError::EmptyHeader));
    }
}
