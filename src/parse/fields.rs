use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while1},
    character::complete::satisfy,
    combinator::{all_consuming, map, recognize},
    sequence::separated_pair,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLineRef<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> From<(&'a str, &'a str)> for HeaderLineRef<'a> {
    fn from(value: (&'a str, &'a str)) -> Self {
        Self {
            name: value.0,
            value: value.1,
        }
    }
}

/// A complete `Name: value` line, without its line ending.
pub fn header_line(input: &str) -> IResult<&str, HeaderLineRef<'_>> {
    let pair = separated_pair(header_name, tag(": "), header_value);

    map(all_consuming(pair), HeaderLineRef::from).parse(input)
}

/// A letter followed by at least one letter, digit or hyphen.
pub fn header_name(input: &str) -> IResult<&str, &str> {
    recognize((satisfy(|c| c.is_ascii_alphabetic()), take_while1(is_name_char))).parse(input)
}

/// One or more characters up to the line ending.
pub fn header_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c| !is_line_break(c)).parse(input)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

pub fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line() {
        let (_remain, output) = header_line("Host: example.com").unwrap();
        assert_eq!(output.name, "Host");
        assert_eq!(output.value, "example.com");

        let (_remain, output) = header_line("X-Space:  ").unwrap();
        assert_eq!(output.name, "X-Space");
        assert_eq!(output.value, " ");

        let (_remain, output) = header_line("Accept: a: b").unwrap();
        assert_eq!(output.name, "Accept");
        assert_eq!(output.value, "a: b");
    }

    #[test]
    fn test_header_line_invalid() {
        assert!(header_line("Host example.com").is_err());
        assert!(header_line("Host:example.com").is_err());
        assert!(header_line("X_Foo: bar").is_err());
        assert!(header_line("1abc: bar").is_err());
        assert!(header_line(": bar").is_err());
        assert!(header_line("Host: a\r").is_err());
        assert!(header_line("A: b").is_err());
        assert!(header_line("Host: ").is_err());
        assert!(header_line("Host:").is_err());
    }

    #[test]
    fn test_header_name() {
        assert!(all_consuming(header_name).parse("a").is_err());
        assert!(all_consuming(header_name).parse("ab").is_ok());
        assert!(all_consuming(header_name).parse("Content-Type").is_ok());
        assert!(all_consuming(header_name).parse("X-1").is_ok());
        assert!(all_consuming(header_name).parse("-a").is_err());
        assert!(all_consuming(header_name).parse("").is_err());
    }
}
