use logos::Logos;

/// A recognized lexeme of the calculator language.
///
/// Single characters are classified one at a time while scanning. Function
/// names are classified after the parser has collected a full name run, so a
/// lexeme only maps to a symbol when the *whole* string matches.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`, the terminator appended by the scanner.
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// The placeholder a tab is normalized into.
    #[token(" ")]
    Blank,
    /// `log(base, x)`
    #[token("log")]
    Log,
    /// `rt(index, radicand)`
    #[token("rt")]
    Rt,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `asin`
    #[token("asin")]
    Asin,
    /// `acos`
    #[token("acos")]
    Acos,
    /// `atan`
    #[token("atan")]
    Atan,
    /// `log10`
    #[token("log10")]
    Log10,
    /// `ln`
    #[token("ln")]
    Ln,
    /// `exp`
    #[token("exp")]
    Exp,
    /// `abs`
    #[token("abs")]
    Abs,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
}

impl Symbol {
    /// Classifies a complete lexeme.
    ///
    /// Returns `None` when the lexeme is not a symbol, or when only a prefix
    /// of it is one (`"sine"` is a name, not `sin` followed by `e`).
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::classifier::Symbol;
    ///
    /// assert_eq!(Symbol::classify("log10"), Some(Symbol::Log10));
    /// assert_eq!(Symbol::classify("^"), Some(Symbol::Caret));
    /// assert_eq!(Symbol::classify("sine"), None);
    /// ```
    #[must_use]
    pub fn classify(lexeme: &str) -> Option<Self> {
        let mut lexer = Self::lexer(lexeme);
        match lexer.next() {
            Some(Ok(symbol)) if lexer.remainder().is_empty() => Some(symbol),
            _ => None,
        }
    }

    /// Classifies a single character, the scanner's current token.
    #[must_use]
    pub fn of_char(c: char) -> Option<Self> {
        let mut buf = [0; 4];
        Self::classify(c.encode_utf8(&mut buf))
    }

    /// The operator a symbol stands for between two operands.
    ///
    /// # Returns
    /// `Some` for `+ - * / ^ %`, `None` for everything else. `log` and `rt`
    /// take two operands but are written as calls, so they have no infix form.
    #[must_use]
    pub const fn infix(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Percent => Some(Operator::Mod),
            Self::Caret => Some(Operator::Pow),
            _ => None,
        }
    }

    /// The operator a symbol stands for in front of its single operand:
    /// negation for `-` and every one-argument function.
    #[must_use]
    pub const fn prefix(self) -> Option<Operator> {
        if matches!(self, Self::Minus) {
            return Some(Operator::Negate);
        }
        match self.function() {
            Some(op) if op.arity() == 1 => Some(op),
            _ => None,
        }
    }

    /// The operator a symbol stands for after its operand.
    #[must_use]
    pub const fn postfix(self) -> Option<Operator> {
        match self {
            Self::Bang => Some(Operator::Factorial),
            _ => None,
        }
    }

    /// The operator a function name calls.
    #[must_use]
    pub const fn function(self) -> Option<Operator> {
        match self {
            Self::Log => Some(Operator::Log),
            Self::Rt => Some(Operator::Root),
            Self::Sin => Some(Operator::Sin),
            Self::Cos => Some(Operator::Cos),
            Self::Tan => Some(Operator::Tan),
            Self::Asin => Some(Operator::Asin),
            Self::Acos => Some(Operator::Acos),
            Self::Atan => Some(Operator::Atan),
            Self::Log10 => Some(Operator::Log10),
            Self::Ln => Some(Operator::Ln),
            Self::Exp => Some(Operator::Exp),
            Self::Abs => Some(Operator::Abs),
            Self::Sqrt => Some(Operator::Sqrt),
            _ => None,
        }
    }

    /// Two-operand operators: `+ - * / ^ %` and the `log`/`rt` calls.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        if self.infix().is_some() {
            return true;
        }
        matches!(self.function(), Some(op) if op.arity() == 2)
    }

    /// Unary minus and every single-argument function.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        self.prefix().is_some()
    }

    /// `!`
    #[must_use]
    pub const fn is_postfix(self) -> bool {
        self.postfix().is_some()
    }

    /// Parentheses, separators, the terminator and the blank placeholder.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self,
                 Self::LParen
                 | Self::RParen
                 | Self::Comma
                 | Self::Semicolon
                 | Self::Equals
                 | Self::Blank)
    }

    /// Named operators that require an argument.
    #[must_use]
    pub const fn is_function(self) -> bool {
        self.function().is_some()
    }
}

/// An entry of the operator stack.
///
/// Every operator that can be pending a reduction, plus the sentinel that
/// bounds a group's reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Stack floor; never reduced.
    Sentinel,
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`, explicit or implied.
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `a ^ b`
    Pow,
    /// `log(base, x)`
    Log,
    /// `rt(index, radicand)`
    Root,
    /// Prefix `-a`
    Negate,
    /// Postfix `a!`
    Factorial,
    /// `sin(a)`
    Sin,
    /// `cos(a)`
    Cos,
    /// `tan(a)`
    Tan,
    /// `asin(a)`
    Asin,
    /// `acos(a)`
    Acos,
    /// `atan(a)`
    Atan,
    /// `log10(a)`
    Log10,
    /// `ln(a)`
    Ln,
    /// `exp(a)`
    Exp,
    /// `abs(a)`
    Abs,
    /// `sqrt(a)`
    Sqrt,
}

/// Functions bind tightest.
pub const FUNCTION_PRECEDENCE: u8 = 64;
/// Postfix factorial.
pub const FACTORIAL_PRECEDENCE: u8 = 48;
/// Modulo ranks above power.
pub const MODULO_PRECEDENCE: u8 = 32;
/// `^`
pub const POWER_PRECEDENCE: u8 = 24;
/// `*` and `/`
pub const PRODUCT_PRECEDENCE: u8 = 16;
/// Prefix minus.
pub const NEGATE_PRECEDENCE: u8 = 8;
/// `+` and `-`
pub const SUM_PRECEDENCE: u8 = 4;

impl Operator {
    /// Maps a character in infix position to its binary operator.
    ///
    /// # Parameters
    /// - `c`: The scanner's current token.
    ///
    /// # Returns
    /// The operator, or `None` when `c` is not a binary symbol.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::classifier::Operator;
    ///
    /// assert_eq!(Operator::binary('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::binary('('), None);
    /// ```
    #[must_use]
    pub fn binary(c: char) -> Option<Self> {
        Symbol::of_char(c)?.infix()
    }

    /// Maps a collected name to its function operator.
    ///
    /// Returns `None` for names that are variables.
    #[must_use]
    pub fn function(name: &str) -> Option<Self> {
        match Symbol::classify(name) {
            Some(symbol) if symbol.is_function() => symbol.function(),
            _ => None,
        }
    }

    /// Binding strength used when deciding whether to reduce.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Sentinel => 0,
            Self::Add | Self::Sub => SUM_PRECEDENCE,
            Self::Negate => NEGATE_PRECEDENCE,
            Self::Mul | Self::Div => PRODUCT_PRECEDENCE,
            Self::Pow => POWER_PRECEDENCE,
            Self::Mod => MODULO_PRECEDENCE,
            Self::Factorial => FACTORIAL_PRECEDENCE,
            Self::Log
            | Self::Root
            | Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::Asin
            | Self::Acos
            | Self::Atan
            | Self::Log10
            | Self::Ln
            | Self::Exp
            | Self::Abs
            | Self::Sqrt => FUNCTION_PRECEDENCE,
        }
    }

    /// Number of operands consumed by a reduction.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Sentinel => 0,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Pow
            | Self::Log
            | Self::Root => 2,
            _ => 1,
        }
    }

    /// Whether two directly adjacent occurrences group right to left.
    ///
    /// Only `^` qualifies, and only against itself.
    #[must_use]
    pub const fn is_right_associative_on_repeat(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Source spelling, used in messages and logs.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sentinel => "#",
            Self::Add => "+",
            Self::Sub | Self::Negate => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Log => "log",
            Self::Root => "rt",
            Self::Factorial => "!",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
        }
    }
}

/// Decides whether the stacked operator `top` must be reduced before
/// `incoming` is pushed.
///
/// Reduces when `top` binds at least as tightly as `incoming`, except when
/// both are the same right-associative-on-repeat operator.
///
/// # Example
/// ```
/// use reckon::interpreter::classifier::{Operator, should_reduce};
///
/// assert!(should_reduce(Operator::Mul, Operator::Add));
/// assert!(!should_reduce(Operator::Add, Operator::Mul));
/// assert!(!should_reduce(Operator::Pow, Operator::Pow));
/// assert!(should_reduce(Operator::Pow, Operator::Mul));
/// ```
#[must_use]
pub fn should_reduce(top: Operator, incoming: Operator) -> bool {
    if top == incoming && top.is_right_associative_on_repeat() {
        return false;
    }
    top.precedence() >= incoming.precedence()
}

/// Characters that start or continue a number literal.
#[must_use]
pub const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Characters that start a name.
#[must_use]
pub const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters that continue a name.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
