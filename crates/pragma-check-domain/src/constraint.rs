//! Version range expressions as written in compiler pragmas.
//!
//! The grammar is the npm one: `||`-separated comparator sets, each set a list
//! of comparators (`>=0.5.0 <0.7.0`, `^0.8.0`, `~0.6`, `0.8.x`, `0.7 - 0.8`).
//! Comparators may also be written back to back (`>=0.5.0<0.7.0`) because
//! pragma tokens are concatenated without separators.

use semver::Version;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid version constraint `{input}`: {reason}")]
pub struct ConstraintParseError {
    pub input: String,
    pub reason: String,
}

impl ConstraintParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Exact,
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparator {
    pub op: Op,
    pub version: Version,
}

impl Comparator {
    fn new(op: Op, major: u64, minor: u64, patch: u64) -> Self {
        Self {
            op,
            version: Version::new(major, minor, patch),
        }
    }

    pub fn matches(&self, v: &Version) -> bool {
        match self.op {
            Op::Exact => *v == self.version,
            Op::Greater => *v > self.version,
            Op::GreaterEq => *v >= self.version,
            Op::Less => *v < self.version,
            Op::LessEq => *v <= self.version,
        }
    }
}

/// A parsed range. An empty comparator set matches every version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionReq {
    raw: String,
    sets: Vec<Vec<Comparator>>,
}

impl VersionReq {
    pub fn parse(input: &str) -> Result<Self, ConstraintParseError> {
        let sets = input
            .split("||")
            .map(|set| parse_set(input, set))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            raw: input.trim().to_string(),
            sets,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn sets(&self) -> &[Vec<Comparator>] {
        &self.sets
    }

    /// `satisfies(version, range)`.
    pub fn matches(&self, v: &Version) -> bool {
        self.sets.iter().any(|set| set_matches(set, v))
    }

    /// Lowest version accepted by the range, or `None` if it accepts nothing.
    pub fn min_version(&self) -> Option<Version> {
        let zero = Version::new(0, 0, 0);
        if self.matches(&zero) {
            return Some(zero);
        }

        let mut min: Option<Version> = None;
        for set in &self.sets {
            let mut floor: Option<Version> = None;
            for c in set {
                let candidate = match c.op {
                    Op::Greater => match successor(&c.version) {
                        Some(v) => v,
                        // Nothing lies above `MAX.MAX.MAX`.
                        None => {
                            floor = None;
                            break;
                        }
                    },
                    Op::GreaterEq | Op::Exact => c.version.clone(),
                    Op::Less | Op::LessEq => continue,
                };
                if floor.as_ref().is_none_or(|f| candidate > *f) {
                    floor = Some(candidate);
                }
            }
            let Some(floor) = floor else { continue };
            if !set_matches(set, &floor) {
                continue;
            }
            if min.as_ref().is_none_or(|m| floor < *m) {
                min = Some(floor);
            }
        }
        min
    }
}

impl FromStr for VersionReq {
    type Err = ConstraintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionReq::parse(s)
    }
}

impl fmt::Display for VersionReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The next release after `v`: `1.2.3` -> `1.2.4`, `1.2.MAX` -> `1.3.0`.
fn successor(v: &Version) -> Option<Version> {
    if let Some(patch) = v.patch.checked_add(1) {
        return Some(Version::new(v.major, v.minor, patch));
    }
    if let Some(minor) = v.minor.checked_add(1) {
        return Some(Version::new(v.major, minor, 0));
    }
    v.major.checked_add(1).map(|major| Version::new(major, 0, 0))
}

fn set_matches(set: &[Comparator], v: &Version) -> bool {
    set.iter().all(|c| c.matches(v))
}

/// `None` components are wildcards (`x`, `*`) or simply absent (`0.8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PrefixOp {
    Caret,
    Tilde,
    Cmp(Op),
}

fn parse_set(input: &str, set: &str) -> Result<Vec<Comparator>, ConstraintParseError> {
    let set = glue_hyphens(set);
    let mut out = Vec::new();
    let mut rest = set.as_str();

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let op_len = rest.find(|c: char| !is_op_char(c)).unwrap_or(rest.len());
        let bare = op_len == 0;
        let op = parse_op(input, &rest[..op_len])?;
        rest = rest[op_len..].trim_start();

        let version_len = rest
            .find(|c: char| c.is_whitespace() || is_op_char(c))
            .unwrap_or(rest.len());
        let token = &rest[..version_len];
        rest = &rest[version_len..];

        if token.is_empty() {
            return Err(ConstraintParseError::new(input, "operator is not followed by a version"));
        }

        match (bare, token.split_once('-')) {
            (true, Some((from, to))) => {
                let from = parse_partial(input, from)?;
                let to = parse_partial(input, to)?;
                hyphen_range(input, from, to, &mut out)?;
            }
            _ => {
                let partial = parse_partial(input, token)?;
                desugar(input, op, partial, &mut out)?;
            }
        }
    }

    Ok(out)
}

/// Turns `0.7.0 - 0.8.0` into the single token `0.7.0-0.8.0`.
fn glue_hyphens(set: &str) -> String {
    let mut out = String::new();
    let mut glue_next = false;
    for word in set.split_whitespace() {
        if word == "-" {
            out.push('-');
            glue_next = true;
            continue;
        }
        if !out.is_empty() && !glue_next {
            out.push(' ');
        }
        out.push_str(word);
        glue_next = false;
    }
    out
}

fn is_op_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^' | '~')
}

fn parse_op(input: &str, op: &str) -> Result<PrefixOp, ConstraintParseError> {
    Ok(match op {
        "" | "=" => PrefixOp::Cmp(Op::Exact),
        ">" => PrefixOp::Cmp(Op::Greater),
        ">=" => PrefixOp::Cmp(Op::GreaterEq),
        "<" => PrefixOp::Cmp(Op::Less),
        "<=" => PrefixOp::Cmp(Op::LessEq),
        "^" => PrefixOp::Caret,
        "~" | "~>" => PrefixOp::Tilde,
        other => {
            return Err(ConstraintParseError::new(input, format!("unknown operator `{other}`")));
        }
    })
}

fn parse_partial(input: &str, token: &str) -> Result<Partial, ConstraintParseError> {
    let token = token.strip_prefix('v').unwrap_or(token);
    if token.contains(['-', '+']) {
        return Err(ConstraintParseError::new(
            input,
            format!("pre-release and build metadata are not supported: `{token}`"),
        ));
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() > 3 {
        return Err(ConstraintParseError::new(
            input,
            format!("too many version components in `{token}`"),
        ));
    }

    let mut nums: [Option<u64>; 3] = [None; 3];
    let mut seen_wildcard = false;
    for (slot, part) in nums.iter_mut().zip(parts.iter()) {
        if matches!(*part, "x" | "X" | "*") {
            seen_wildcard = true;
            continue;
        }
        if seen_wildcard {
            return Err(ConstraintParseError::new(
                input,
                format!("version component after wildcard in `{token}`"),
            ));
        }
        let n = part.parse::<u64>().map_err(|_| {
            ConstraintParseError::new(input, format!("invalid version component `{part}`"))
        })?;
        *slot = Some(n);
    }

    Ok(Partial {
        major: nums[0],
        minor: nums[1],
        patch: nums[2],
    })
}

fn desugar(
    input: &str,
    op: PrefixOp,
    p: Partial,
    out: &mut Vec<Comparator>,
) -> Result<(), ConstraintParseError> {
    match op {
        PrefixOp::Caret => caret(input, p, out),
        PrefixOp::Tilde => tilde(input, p, out),
        PrefixOp::Cmp(op) => primitive(input, op, p, out),
    }
}

/// `n + 1`, or a parse error when `n` is already `u64::MAX`.
fn next(input: &str, n: u64) -> Result<u64, ConstraintParseError> {
    n.checked_add(1)
        .ok_or_else(|| ConstraintParseError::new(input, "version component overflows"))
}

fn caret(input: &str, p: Partial, out: &mut Vec<Comparator>) -> Result<(), ConstraintParseError> {
    let Some(major) = p.major else { return Ok(()) };
    match (p.minor, p.patch) {
        (None, _) => {
            out.push(Comparator::new(Op::GreaterEq, major, 0, 0));
            out.push(Comparator::new(Op::Less, next(input, major)?, 0, 0));
        }
        (Some(minor), None) => {
            out.push(Comparator::new(Op::GreaterEq, major, minor, 0));
            if major == 0 {
                out.push(Comparator::new(Op::Less, 0, next(input, minor)?, 0));
            } else {
                out.push(Comparator::new(Op::Less, next(input, major)?, 0, 0));
            }
        }
        (Some(minor), Some(patch)) => {
            out.push(Comparator::new(Op::GreaterEq, major, minor, patch));
            if major != 0 {
                out.push(Comparator::new(Op::Less, next(input, major)?, 0, 0));
            } else if minor != 0 {
                out.push(Comparator::new(Op::Less, 0, next(input, minor)?, 0));
            } else {
                out.push(Comparator::new(Op::Less, 0, 0, next(input, patch)?));
            }
        }
    }
    Ok(())
}

fn tilde(input: &str, p: Partial, out: &mut Vec<Comparator>) -> Result<(), ConstraintParseError> {
    let Some(major) = p.major else { return Ok(()) };
    match p.minor {
        None => {
            out.push(Comparator::new(Op::GreaterEq, major, 0, 0));
            out.push(Comparator::new(Op::Less, next(input, major)?, 0, 0));
        }
        Some(minor) => {
            out.push(Comparator::new(
                Op::GreaterEq,
                major,
                minor,
                p.patch.unwrap_or(0),
            ));
            out.push(Comparator::new(Op::Less, major, next(input, minor)?, 0));
        }
    }
    Ok(())
}

fn primitive(
    input: &str,
    op: Op,
    p: Partial,
    out: &mut Vec<Comparator>,
) -> Result<(), ConstraintParseError> {
    let Some(major) = p.major else {
        // `*`, `>=x`: everything. `>x`, `<x`: nothing.
        if matches!(op, Op::Greater | Op::Less) {
            out.push(Comparator::new(Op::Less, 0, 0, 0));
        }
        return Ok(());
    };

    if let (Some(minor), Some(patch)) = (p.minor, p.patch) {
        out.push(Comparator::new(op, major, minor, patch));
        return Ok(());
    }

    // Exclusive upper end of the partial: `1` ends at `2.0.0`, `1.2` at `1.3.0`.
    let upper = || -> Result<Version, ConstraintParseError> {
        Ok(match p.minor {
            None => Version::new(next(input, major)?, 0, 0),
            Some(minor) => Version::new(major, next(input, minor)?, 0),
        })
    };
    let minor = p.minor.unwrap_or(0);
    match op {
        Op::Exact => {
            out.push(Comparator::new(Op::GreaterEq, major, minor, 0));
            out.push(Comparator {
                op: Op::Less,
                version: upper()?,
            });
        }
        // `>1.2` is `>=1.3.0`; `<=1.2` is `<1.3.0`.
        Op::Greater => out.push(Comparator {
            op: Op::GreaterEq,
            version: upper()?,
        }),
        Op::LessEq => out.push(Comparator {
            op: Op::Less,
            version: upper()?,
        }),
        Op::GreaterEq => out.push(Comparator::new(Op::GreaterEq, major, minor, 0)),
        Op::Less => out.push(Comparator::new(Op::Less, major, minor, 0)),
    }
    Ok(())
}

fn hyphen_range(
    input: &str,
    from: Partial,
    to: Partial,
    out: &mut Vec<Comparator>,
) -> Result<(), ConstraintParseError> {
    if let Some(major) = from.major {
        out.push(Comparator::new(
            Op::GreaterEq,
            major,
            from.minor.unwrap_or(0),
            from.patch.unwrap_or(0),
        ));
    }

    let Some(major) = to.major else { return Ok(()) };
    match (to.minor, to.patch) {
        (None, _) => out.push(Comparator::new(Op::Less, next(input, major)?, 0, 0)),
        (Some(minor), None) => out.push(Comparator::new(Op::Less, major, next(input, minor)?, 0)),
        (Some(minor), Some(patch)) => {
            out.push(Comparator::new(Op::LessEq, major, minor, patch));
        }
    }
    Ok(())
}
