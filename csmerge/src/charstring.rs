//--------------------------------------------------------------------
// charstring.rs
//--------------------------------------------------------------------
// Parses Type 2 charstring token streams into path lists and generates
// the canonical token stream back from a path list
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::boolean::compute_union;
use crate::error::{Error, GeometryError, ParseError, ParseErrorKind};
use crate::geometry::{Coord, Point};
use crate::curve::Curve;
use crate::path::{Path, PathList};

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum CsToken {
    #[display(fmt = "{}", _0)]
    Operand(i32),
    #[display(fmt = "{}", _0)]
    Operator(String),
}

pub type Charstring = Vec<CsToken>;

impl From<i32> for CsToken {
    fn from(num: i32) -> CsToken {
        CsToken::Operand(num)
    }
}

impl From<&str> for CsToken {
    fn from(name: &str) -> CsToken {
        CsToken::Operator(name.to_string())
    }
}

impl From<String> for CsToken {
    fn from(name: String) -> CsToken {
        CsToken::Operator(name)
    }
}

/// Builds a `Charstring` from a mixed list of operands and operator names:
/// `charstring![-10, -10, "rmoveto", 20, "hlineto", "endchar"]`.
#[macro_export]
macro_rules! charstring {
    ($($tok:expr),* $(,)?) => {
        vec![$($crate::CsToken::from($tok)),*]
    };
}

/// Runs the charstring through the cursor state machine, producing one path
/// per subpath. A stream that ends without `endchar` has its last path
/// closed as if the operator were present.
pub fn parse_charstring(cs: &Charstring) -> Result<PathList, ParseError> {
    let mut paths = PathList::new();
    let mut cursor = Point::zero();
    let mut stack: Vec<i32> = Vec::new();

    for (index, tok) in cs.iter().enumerate() {
        match tok {
            CsToken::Operand(num) => stack.push(*num),
            CsToken::Operator(op) => {
                let args = std::mem::replace(&mut stack, Vec::new());
                if let Err(kind) = process(&mut paths, &mut cursor, op, &args) {
                    return Err(ParseError::AtToken { kind, index, stack: args });
                }
            }
        }
    }

    if let Some(path) = paths.last_mut() {
        path.close();
    }

    if !stack.is_empty() {
        return Err(ParseError::RedundantArguments { stack });
    }

    Ok(paths)
}

fn wrong_args(op: &'static str, nargs: usize) -> ParseErrorKind {
    ParseErrorKind::WrongNumberOfArguments { op, nargs }
}

// Any *moveto while the current path is non-empty closes it and begins a
// new one
fn start_new_path(paths: &mut PathList) {
    let path = paths.last_mut().unwrap();
    if !path.is_empty() {
        log::trace!("starting new path");
        path.close();
        paths.push(Path::new());
    }
}

fn append_line(paths: &mut PathList, cursor: &mut Point, dx: Coord, dy: Coord)
    -> Result<(), GeometryError> {
    let a = *cursor;
    let b = a + Point::new(dx, dy);

    let path = paths.last_mut().unwrap();
    path.append(Curve::line(a, b))?;
    *cursor = path.final_point();
    Ok(())
}

// Each control-point delta is relative to the previous anchor, not the cursor
fn append_bezier(paths: &mut PathList, cursor: &mut Point, db: Point, dc: Point, dd: Point)
    -> Result<(), GeometryError> {
    let a = *cursor;
    let b = a + db;
    let c = b + dc;
    let d = c + dd;

    let path = paths.last_mut().unwrap();
    path.append(Curve::cubic_bezier(a, b, c, d))?;
    *cursor = path.final_point();
    Ok(())
}

fn process(paths: &mut PathList, cursor: &mut Point, op: &str, args: &[i32])
    -> Result<(), ParseErrorKind> {
    let nargs = args.len();
    let arg = |i: usize| args[i] as Coord;

    if paths.is_empty() {
        paths.push(Path::new());
    }

    match op {
        "rmoveto" => {
            if nargs != 2 {
                return Err(wrong_args("rmoveto", nargs));
            }

            start_new_path(paths);
            log::trace!("moving cursor by ({}, {})", args[0], args[1]);
            *cursor += Point::new(arg(0), arg(1));
        }
        "hmoveto" => {
            if nargs != 1 {
                return Err(wrong_args("hmoveto", nargs));
            }

            start_new_path(paths);
            *cursor += Point::new(arg(0), 0.0);
        }
        "vmoveto" => {
            if nargs != 1 {
                return Err(wrong_args("vmoveto", nargs));
            }

            start_new_path(paths);
            *cursor += Point::new(0.0, arg(0));
        }
        "rlineto" => {
            if nargs % 2 != 0 {
                return Err(wrong_args("rlineto", nargs));
            }

            for i in (0..nargs).step_by(2) {
                append_line(paths, cursor, arg(i), arg(i + 1))?;
            }
        }
        "hlineto" => {
            // Alternating horizontal/vertical segments, starting horizontal
            for i in 0..nargs {
                if i % 2 == 0 {
                    append_line(paths, cursor, arg(i), 0.0)?;
                } else {
                    append_line(paths, cursor, 0.0, arg(i))?;
                }
            }
        }
        "vlineto" => {
            for i in 0..nargs {
                if i % 2 == 0 {
                    append_line(paths, cursor, 0.0, arg(i))?;
                } else {
                    append_line(paths, cursor, arg(i), 0.0)?;
                }
            }
        }
        "rrcurveto" => {
            if nargs % 6 != 0 {
                return Err(wrong_args("rrcurveto", nargs));
            }

            for i in (0..nargs).step_by(6) {
                append_bezier(paths, cursor,
                    Point::new(arg(i), arg(i + 1)),
                    Point::new(arg(i + 2), arg(i + 3)),
                    Point::new(arg(i + 4), arg(i + 5)))?;
            }
        }
        "hhcurveto" => {
            if nargs % 4 != 0 && nargs % 4 != 1 {
                return Err(wrong_args("hhcurveto", nargs));
            }

            // An odd leading argument bends the first curve's entry off the
            // horizontal
            let mut i = 0;
            let mut by = 0.0;

            if nargs % 4 == 1 {
                by = arg(0);
                i = 1;
            }

            while i < nargs {
                append_bezier(paths, cursor,
                    Point::new(arg(i), by),
                    Point::new(arg(i + 1), arg(i + 2)),
                    Point::new(arg(i + 3), 0.0))?;
                by = 0.0;
                i += 4;
            }
        }
        "vvcurveto" => {
            if nargs % 4 != 0 && nargs % 4 != 1 {
                return Err(wrong_args("vvcurveto", nargs));
            }

            let mut i = 0;
            let mut bx = 0.0;

            if nargs % 4 == 1 {
                bx = arg(0);
                i = 1;
            }

            while i < nargs {
                append_bezier(paths, cursor,
                    Point::new(bx, arg(i)),
                    Point::new(arg(i + 1), arg(i + 2)),
                    Point::new(0.0, arg(i + 3)))?;
                bx = 0.0;
                i += 4;
            }
        }
        "hvcurveto" => {
            if nargs % 8 == 4 || nargs % 8 == 5 {
                // Odd family: one horizontal-entry curve, then alternating pairs
                let dx = if nargs == 5 { arg(4) } else { 0.0 };
                append_bezier(paths, cursor,
                    Point::new(arg(0), 0.0),
                    Point::new(arg(1), arg(2)),
                    Point::new(dx, arg(3)))?;

                let n = (nargs - 4) / 8;
                for cv in 0..n {
                    let i = 4 + cv * 8;

                    append_bezier(paths, cursor,
                        Point::new(0.0, arg(i)),
                        Point::new(arg(i + 1), arg(i + 2)),
                        Point::new(arg(i + 3), 0.0))?;

                    let dx = if cv == n - 1 && nargs % 8 == 5 { arg(i + 8) } else { 0.0 };
                    append_bezier(paths, cursor,
                        Point::new(arg(i + 4), 0.0),
                        Point::new(arg(i + 5), arg(i + 6)),
                        Point::new(dx, arg(i + 7)))?;
                }
            } else if nargs >= 8 && nargs % 8 <= 1 {
                let n = nargs / 8;
                for cv in 0..n {
                    let i = cv * 8;

                    append_bezier(paths, cursor,
                        Point::new(arg(i), 0.0),
                        Point::new(arg(i + 1), arg(i + 2)),
                        Point::new(0.0, arg(i + 3)))?;

                    let dy = if cv == n - 1 && nargs % 8 == 1 { arg(i + 8) } else { 0.0 };
                    append_bezier(paths, cursor,
                        Point::new(0.0, arg(i + 4)),
                        Point::new(arg(i + 5), arg(i + 6)),
                        Point::new(arg(i + 7), dy))?;
                }
            } else {
                return Err(wrong_args("hvcurveto", nargs));
            }
        }
        "vhcurveto" => {
            if nargs % 8 == 4 || nargs % 8 == 5 {
                let dy = if nargs == 5 { arg(4) } else { 0.0 };
                append_bezier(paths, cursor,
                    Point::new(0.0, arg(0)),
                    Point::new(arg(1), arg(2)),
                    Point::new(arg(3), dy))?;

                let n = (nargs - 4) / 8;
                for cv in 0..n {
                    let i = 4 + cv * 8;

                    append_bezier(paths, cursor,
                        Point::new(arg(i), 0.0),
                        Point::new(arg(i + 1), arg(i + 2)),
                        Point::new(0.0, arg(i + 3)))?;

                    let dy = if cv == n - 1 && nargs % 8 == 5 { arg(i + 8) } else { 0.0 };
                    append_bezier(paths, cursor,
                        Point::new(0.0, arg(i + 4)),
                        Point::new(arg(i + 5), arg(i + 6)),
                        Point::new(arg(i + 7), dy))?;
                }
            } else if nargs >= 8 && nargs % 8 <= 1 {
                let n = nargs / 8;
                for cv in 0..n {
                    let i = cv * 8;

                    append_bezier(paths, cursor,
                        Point::new(0.0, arg(i)),
                        Point::new(arg(i + 1), arg(i + 2)),
                        Point::new(arg(i + 3), 0.0))?;

                    let dx = if cv == n - 1 && nargs % 8 == 1 { arg(i + 8) } else { 0.0 };
                    append_bezier(paths, cursor,
                        Point::new(arg(i + 4), 0.0),
                        Point::new(arg(i + 5), arg(i + 6)),
                        Point::new(dx, arg(i + 7)))?;
                }
            } else {
                return Err(wrong_args("vhcurveto", nargs));
            }
        }
        "rcurveline" => {
            if nargs < 8 || nargs % 6 != 2 {
                return Err(wrong_args("rcurveline", nargs));
            }

            let n = (nargs - 2) / 6;
            for cv in 0..n {
                let i = cv * 6;
                append_bezier(paths, cursor,
                    Point::new(arg(i), arg(i + 1)),
                    Point::new(arg(i + 2), arg(i + 3)),
                    Point::new(arg(i + 4), arg(i + 5)))?;
            }

            append_line(paths, cursor, arg(nargs - 2), arg(nargs - 1))?;
        }
        "rlinecurve" => {
            if nargs < 8 || nargs % 2 != 0 {
                return Err(wrong_args("rlinecurve", nargs));
            }

            let n = (nargs - 6) / 2;
            for cv in 0..n {
                let i = cv * 2;
                append_line(paths, cursor, arg(i), arg(i + 1))?;
            }

            append_bezier(paths, cursor,
                Point::new(arg(nargs - 6), arg(nargs - 5)),
                Point::new(arg(nargs - 4), arg(nargs - 3)),
                Point::new(arg(nargs - 2), arg(nargs - 1)))?;
        }
        "flex" => return Err(ParseErrorKind::NotImplemented("flex")),
        "hflex" => return Err(ParseErrorKind::NotImplemented("hflex")),
        "hflex1" => return Err(ParseErrorKind::NotImplemented("hflex1")),
        "flex1" => return Err(ParseErrorKind::NotImplemented("flex1")),
        "endchar" => {
            if nargs != 0 {
                return Err(wrong_args("endchar", nargs));
            }

            paths.last_mut().unwrap().close();
        }
        _ => {
            return Err(ParseErrorKind::UnrecognisedToken(
                CsToken::Operator(op.to_string())));
        }
    }

    Ok(())
}

/// Serialises a path list into the canonical operator stream: `rmoveto`
/// between paths, `rlineto`/`rrcurveto` for the curves, one `endchar` at
/// the end. Coordinates are truncated toward zero.
pub fn generate_charstring(paths: &PathList) -> Charstring {
    let mut cs = Charstring::new();
    let mut cursor = Point::zero();

    for path in paths {
        for curve in path {
            let p = curve.initial_point();

            if p != cursor {
                let d = p - cursor;
                cs.push(CsToken::Operand(d.x as i32));
                cs.push(CsToken::Operand(d.y as i32));
                cs.push(CsToken::from("rmoveto"));
                cursor = p;
            }

            match curve {
                Curve::Line(lseg) => {
                    let d = lseg.b - cursor;
                    cs.push(CsToken::Operand(d.x as i32));
                    cs.push(CsToken::Operand(d.y as i32));
                    cs.push(CsToken::from("rlineto"));
                }
                Curve::CubicBezier(bezier) => {
                    let db = bezier.b - cursor;
                    let dc = bezier.c - bezier.b;
                    let dd = bezier.d - bezier.c;

                    cs.push(CsToken::Operand(db.x as i32));
                    cs.push(CsToken::Operand(db.y as i32));
                    cs.push(CsToken::Operand(dc.x as i32));
                    cs.push(CsToken::Operand(dc.y as i32));
                    cs.push(CsToken::Operand(dd.x as i32));
                    cs.push(CsToken::Operand(dd.y as i32));
                    cs.push(CsToken::from("rrcurveto"));
                }
            }

            cursor = curve.final_point();
        }
    }

    cs.push(CsToken::from("endchar"));
    cs
}

/// Merges two charstrings into one whose outline is the union of both.
pub fn merge_charstrings(cs1: &Charstring, cs2: &Charstring) -> Result<Charstring, Error> {
    let paths1 = parse_charstring(cs1)?;
    let paths2 = parse_charstring(cs2)?;
    let merged = compute_union(&paths1, &paths2)?;

    Ok(generate_charstring(&merged))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::LineSegment;

    fn lseg(path: &Path, idx: usize) -> &LineSegment {
        match &path[idx] {
            Curve::Line(l) => l,
            other => panic!("expected line segment, got {:?}", other),
        }
    }

    #[test]
    fn square() {
        let cs = charstring![
            -10, -10, "rmoveto",
            20, "vlineto",
            20, "hlineto",
            -20, "vlineto",
            -20, "hlineto",
            "endchar"
        ];

        let paths = parse_charstring(&cs).unwrap();
        assert_eq!(paths.len(), 1);

        let path = &paths[0];
        assert_eq!(path.len(), 4);

        assert_eq!(lseg(path, 0).a, Point::new(-10.0, -10.0));
        assert_eq!(lseg(path, 0).b, Point::new(-10.0, 10.0));
        assert_eq!(lseg(path, 1).a, Point::new(-10.0, 10.0));
        assert_eq!(lseg(path, 1).b, Point::new(10.0, 10.0));
        assert_eq!(lseg(path, 2).a, Point::new(10.0, 10.0));
        assert_eq!(lseg(path, 2).b, Point::new(10.0, -10.0));
        assert_eq!(lseg(path, 3).a, Point::new(10.0, -10.0));
        assert_eq!(lseg(path, 3).b, Point::new(-10.0, -10.0));
    }

    #[test]
    fn square_no_endchar() {
        let cs = charstring![
            -10, -10, "rmoveto",
            20, "vlineto",
            20, "hlineto",
            -20, "vlineto",
            -20, "hlineto"
        ];

        let paths = parse_charstring(&cs).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4);
        assert!(paths[0].is_closed());
    }

    #[test]
    fn square_close_path() {
        // The last edge is missing; endchar synthesises it
        let cs = charstring![
            -10, -10, "rmoveto",
            20, "vlineto",
            20, "hlineto",
            -20, "vlineto",
            "endchar"
        ];

        let paths = parse_charstring(&cs).unwrap();
        assert_eq!(paths.len(), 1);

        let path = &paths[0];
        assert_eq!(path.len(), 4);
        assert_eq!(lseg(path, 3).a, Point::new(10.0, -10.0));
        assert_eq!(lseg(path, 3).b, Point::new(-10.0, -10.0));
    }

    #[test]
    fn open_path_closed_at_end_of_stream() {
        let cs = charstring![0, 0, "rmoveto", 10, 0, "rlineto", 0, 10, "rlineto"];

        let paths = parse_charstring(&cs).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
        assert!(paths[0].is_closed());
    }

    #[test]
    fn empty_stream() {
        let paths = parse_charstring(&Charstring::new()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn moveto_starts_new_path() {
        let cs = charstring![
            0, 0, "rmoveto", 10, "hlineto", 10, "vlineto",
            20, 0, "rmoveto", 10, "hlineto", 10, "vlineto",
            "endchar"
        ];

        let paths = parse_charstring(&cs).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].is_closed());
        assert!(paths[1].is_closed());
        assert_eq!(paths[1][0].initial_point(), Point::new(30.0, 10.0));
    }

    #[test]
    fn charstring_to_paths_and_back() {
        let cs1 = charstring![
            -10, -10, "rmoveto",
            20, "vlineto",
            20, "hlineto",
            -20, "vlineto",
            -20, "hlineto",
            "endchar"
        ];

        let paths = parse_charstring(&cs1).unwrap();
        let cs2 = generate_charstring(&paths);

        let expected = charstring![
            -10, -10, "rmoveto",
            0, 20, "rlineto",
            20, 0, "rlineto",
            0, -20, "rlineto",
            -20, 0, "rlineto",
            "endchar"
        ];

        assert_eq!(cs2, expected);
    }

    #[test]
    fn paths_survive_generate_and_parse() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(-10.0, -10.0), Point::new(10.0, -10.0))).unwrap();
        path.append(Curve::cubic_bezier(
            Point::new(10.0, -10.0), Point::new(7.0, -4.0),
            Point::new(13.0, 3.0), Point::new(10.0, 10.0))).unwrap();
        path.append(Curve::line(Point::new(10.0, 10.0), Point::new(-10.0, 10.0))).unwrap();
        path.append(Curve::line(Point::new(-10.0, 10.0), Point::new(-10.0, -10.0))).unwrap();

        let paths1 = vec![path];
        let paths2 = parse_charstring(&generate_charstring(&paths1)).unwrap();

        assert_eq!(paths1, paths2);
    }

    #[test]
    fn watermark() {
        let watermark = charstring![
            50, -240, "rmoveto",
            32, 0, "rlineto",
            198, 415, "rlineto",
            198, -415, "rlineto",
            32, 0, "rlineto",
            -214, 449, "rlineto",
            214, 449, "rlineto",
            -32, 0, "rlineto",
            -198, -415, "rlineto",
            -198, 415, "rlineto",
            -32, 0, "rlineto",
            214, -449, "rlineto",
            "endchar"
        ];

        let paths = parse_charstring(&watermark).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 12);
        assert!(paths[0].is_closed());
    }

    #[test]
    fn rrcurveto_chains_from_anchor() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, "rrcurveto", "endchar"];

        let paths = parse_charstring(&cs).unwrap();
        match &paths[0][0] {
            Curve::CubicBezier(bez) => {
                assert_eq!(bez.a, Point::new(0.0, 0.0));
                assert_eq!(bez.b, Point::new(1.0, 2.0));
                assert_eq!(bez.c, Point::new(4.0, 6.0));
                assert_eq!(bez.d, Point::new(9.0, 12.0));
            }
            other => panic!("expected cubic Bézier, got {:?}", other),
        }
    }

    #[test]
    fn hhcurveto_with_leading_offset() {
        let cs = charstring![0, 0, "rmoveto", 10, 1, 2, 3, 4, 5, 6, 7, 8, "hhcurveto"];

        let paths = parse_charstring(&cs).unwrap();
        let path = &paths[0];

        match (&path[0], &path[1]) {
            (Curve::CubicBezier(b1), Curve::CubicBezier(b2)) => {
                assert_eq!(b1.a, Point::new(0.0, 0.0));
                assert_eq!(b1.b, Point::new(1.0, 10.0));
                assert_eq!(b1.c, Point::new(3.0, 13.0));
                assert_eq!(b1.d, Point::new(7.0, 13.0));

                // The leading dy applies to the first curve only
                assert_eq!(b2.a, Point::new(7.0, 13.0));
                assert_eq!(b2.b, Point::new(12.0, 13.0));
                assert_eq!(b2.c, Point::new(18.0, 20.0));
                assert_eq!(b2.d, Point::new(26.0, 20.0));
            }
            other => panic!("expected two cubic Béziers, got {:?}", other),
        }
    }

    #[test]
    fn vvcurveto_with_leading_offset() {
        let cs = charstring![0, 0, "rmoveto", 10, 1, 2, 3, 4, "vvcurveto"];

        let paths = parse_charstring(&cs).unwrap();
        match &paths[0][0] {
            Curve::CubicBezier(bez) => {
                assert_eq!(bez.b, Point::new(10.0, 1.0));
                assert_eq!(bez.c, Point::new(12.0, 4.0));
                assert_eq!(bez.d, Point::new(12.0, 8.0));
            }
            other => panic!("expected cubic Bézier, got {:?}", other),
        }
    }

    #[test]
    fn hvcurveto_short_form_with_trailing_offset() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, "hvcurveto"];

        let paths = parse_charstring(&cs).unwrap();
        match &paths[0][0] {
            Curve::CubicBezier(bez) => {
                assert_eq!(bez.b, Point::new(1.0, 0.0));
                assert_eq!(bez.c, Point::new(3.0, 3.0));
                assert_eq!(bez.d, Point::new(8.0, 7.0));
            }
            other => panic!("expected cubic Bézier, got {:?}", other),
        }
    }

    #[test]
    fn hvcurveto_long_form() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, 7, 8, "hvcurveto"];

        let paths = parse_charstring(&cs).unwrap();
        let path = &paths[0];

        match (&path[0], &path[1]) {
            (Curve::CubicBezier(b1), Curve::CubicBezier(b2)) => {
                assert_eq!(b1.b, Point::new(1.0, 0.0));
                assert_eq!(b1.c, Point::new(3.0, 3.0));
                assert_eq!(b1.d, Point::new(3.0, 7.0));

                assert_eq!(b2.b, Point::new(3.0, 12.0));
                assert_eq!(b2.c, Point::new(9.0, 19.0));
                assert_eq!(b2.d, Point::new(17.0, 19.0));
            }
            other => panic!("expected two cubic Béziers, got {:?}", other),
        }
    }

    #[test]
    fn vhcurveto_short_form() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, "vhcurveto"];

        let paths = parse_charstring(&cs).unwrap();
        match &paths[0][0] {
            Curve::CubicBezier(bez) => {
                assert_eq!(bez.b, Point::new(0.0, 1.0));
                assert_eq!(bez.c, Point::new(2.0, 4.0));
                assert_eq!(bez.d, Point::new(6.0, 4.0));
            }
            other => panic!("expected cubic Bézier, got {:?}", other),
        }
    }

    #[test]
    fn rcurveline() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, 7, 8, "rcurveline"];

        let paths = parse_charstring(&cs).unwrap();
        let path = &paths[0];

        match (&path[0], &path[1]) {
            (Curve::CubicBezier(bez), Curve::Line(line)) => {
                assert_eq!(bez.d, Point::new(9.0, 12.0));
                assert_eq!(line.b, Point::new(16.0, 20.0));
            }
            other => panic!("expected curve then line, got {:?}", other),
        }
    }

    #[test]
    fn rlinecurve() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, 7, 8, "rlinecurve"];

        let paths = parse_charstring(&cs).unwrap();
        let path = &paths[0];

        match (&path[0], &path[1]) {
            (Curve::Line(line), Curve::CubicBezier(bez)) => {
                assert_eq!(line.b, Point::new(1.0, 2.0));
                assert_eq!(bez.b, Point::new(4.0, 6.0));
                assert_eq!(bez.d, Point::new(16.0, 20.0));
            }
            other => panic!("expected line then curve, got {:?}", other),
        }
    }

    #[test]
    fn wrong_number_of_arguments() {
        let cs = charstring![1, 2, 3, "rmoveto"];
        match parse_charstring(&cs) {
            Err(ParseError::AtToken { kind, index, stack }) => {
                assert_eq!(kind, ParseErrorKind::WrongNumberOfArguments { op: "rmoveto", nargs: 3 });
                assert_eq!(index, 3);
                assert_eq!(stack, vec![1, 2, 3]);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn hvcurveto_rejects_single_argument() {
        // nargs == 1 slips through the original's modular check; the CFF
        // families all need at least four arguments
        let cs = charstring![0, 0, "rmoveto", 7, "hvcurveto"];
        assert!(parse_charstring(&cs).is_err());
    }

    #[test]
    fn rcurveline_rejects_bare_curve() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, "rcurveline"];
        assert!(parse_charstring(&cs).is_err());
    }

    #[test]
    fn unrecognised_token() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, "wiggle"];
        match parse_charstring(&cs) {
            Err(ParseError::AtToken { kind, .. }) => {
                assert_eq!(kind, ParseErrorKind::UnrecognisedToken(CsToken::from("wiggle")));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn flex_not_implemented() {
        let cs = charstring![0, 0, "rmoveto", 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, "flex"];
        match parse_charstring(&cs) {
            Err(ParseError::AtToken { kind, .. }) => {
                assert_eq!(kind, ParseErrorKind::NotImplemented("flex"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn merge_overlapping_squares() {
        // Counter-clockwise squares, so they read as outer boundaries
        let cs1 = charstring![
            -10, -10, "rmoveto",
            20, "hlineto",
            20, "vlineto",
            -20, "hlineto",
            "endchar"
        ];
        let cs2 = charstring![
            -5, -5, "rmoveto",
            20, "hlineto",
            20, "vlineto",
            -20, "hlineto",
            "endchar"
        ];

        let merged = merge_charstrings(&cs1, &cs2).unwrap();
        assert_eq!(merged.last(), Some(&CsToken::from("endchar")));

        // The result draws the L-shaped union of the two squares
        let paths = parse_charstring(&merged).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 8);
        assert!(paths[0].is_closed());

        let xs: Vec<i32> = paths[0].iter().map(|c| c.initial_point().x as i32).collect();
        assert!(xs.iter().all(|x| [-10, -5, 10, 15].contains(x)));
    }

    #[test]
    fn redundant_arguments() {
        let cs = charstring![0, 0, "rmoveto", 10, "hlineto", 1, 2];
        match parse_charstring(&cs) {
            Err(ParseError::RedundantArguments { stack }) => {
                assert_eq!(stack, vec![1, 2]);
            }
            other => panic!("expected redundant-arguments error, got {:?}", other),
        }
    }
}
