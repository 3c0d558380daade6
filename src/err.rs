use chrono;
use std::num;

quick_error! {
    #[derive(Debug)]
    pub enum ParseError {
        Format(err: FormatError) {
            from()
            description("Invalid format")
            display("Sentence has an invalid format: {}", err)
            cause(err)
        }
        InvalidValue(err: InvalidValueError) {
            from()
            description("Invalid value")
            display("Field value is out of range: {}", err)
            cause(err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum FormatError {
        EmptySentence {
            description("Empty sentence")
            display("NMEA sentence is empty")
        }
        MissingSeparator(sep: char) {
            description("Missing separator")
            display("Separator \"{}\" does not occur in the sentence", sep)
        }
        UnknownSeparator {
            description("Unknown separator")
            display("Unable to determine the separator in the NMEA sentence")
        }
        EmptyHeader {
            description("Empty header")
            display("NMEA message header is missing or empty")
        }
        NoFields {
            description("No fields")
            display("NMEA message fields are missing or empty")
        }
        ChecksumFormat {
            description("Invalid checksum format")
            display("Invalid checksum format")
        }
        InvalidChecksum(expected: u8, actual: u8) {
            description("Invalid checksum")
            display("Expected checksum \"{:02X}\", found checksum \"{:02X}\"", expected, actual)
        }
        MissingField(sentence: &'static str, field: &'static str) {
            description("Missing field")
            display("{} sentence does not contain {}", sentence, field)
        }
        CoordinateLength {
            description("Coordinate too short")
            display("Coordinate literal is too short to be split into degrees and minutes")
        }
        Float(err: num::ParseFloatError) {
            from()
            description("Float parsing error")
            display("{}", err)
            cause(err)
        }
        Time(err: chrono::format::ParseError) {
            from()
            description("Time parsing error")
            display("Failed to parse field as time: {}", err)
            cause(err)
        }
        TimeLength {
            description("Invalid time length")
            display("UTC time length is not correct")
        }
        InvalidCode(field: &'static str) {
            description("Invalid code")
            display("{} is not a valid value", field)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum InvalidValueError {
        Coordinate(val: f64, max: f64) {
            description("Invalid coordinate")
            display("Invalid coordinate: {} should be between {} and {}", val, max * -1.0, max)
        }
        WindAngle(val: f64) {
            description("Invalid wind angle")
            display("Wind angle is out of range: {} should be at least 0 and below 360", val)
        }
        WindSpeed(val: f64) {
            description("Invalid wind speed")
            display("Wind speed is out of range: {} should be between 0 and 100", val)
        }
    }
}
