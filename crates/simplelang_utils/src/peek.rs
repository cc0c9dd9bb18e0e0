/// One item of lookahead without consuming it.
pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn eat_while(&mut self, mut pred: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(|item| pred(&item)) {
            self.next();
            count += 1;
        }
        count
    }
}

impl<P: Peek> Peek for &mut P {
    fn peek(&self) -> Option<Self::Item> {
        (**self).peek()
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn eat_only_matching() {
        let mut chars = "==x".chars();
        assert!(chars.eat('='));
        assert!(!chars.eat('x'));
        assert!(chars.eat('='));
        assert_eq!(chars.peek(), Some('x'));
    }

    #[test]
    fn eat_while_counts() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");
        assert_eq!(chars.eat_while(char::is_ascii_digit), 0);
    }
}
