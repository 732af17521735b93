use checkarg::{CheckArg, Flow, OptionSpec, ParseError, Status, ValueType};
use std::cell::{Cell, RefCell};

fn grouped() -> CheckArg<'static> {
    let mut ca = CheckArg::new("test07");
    ca.add('a', "alpha", "opt a", ValueType::None, None);
    ca.add_cb('b', "beta", "opt b", |_, _, _| Ok(()), ValueType::None, None);
    ca.add('c', "gamma", "opt gamma", ValueType::None, None);
    ca.add_cb('d', "delta", "opt delta", |_, _, _| Ok(()), ValueType::None, None);
    ca.add('e', "epsy", "opt e", ValueType::None, None);
    ca
}

#[test]
fn grouped_short_options() {
    let argvs: [&[&str]; 7] = [
        &["-abcd"],
        &["-ab", "-cd"],
        &["-abc", "-d"],
        &["-abc", "--delta"],
        &["-ab", "--gamma", "-d"],
        &["-ac", "--beta", "--delta"],
        &["--alpha", "-bcd"],
    ];

    let mut ca = grouped();
    for argv in argvs {
        assert_eq!(ca.parse(argv).unwrap(), Flow::Continue, "argv: {argv:?}");
        assert!(ca.isset("alpha"));
        assert!(ca.isset("beta"));
        assert!(ca.isset("gamma"));
        assert!(ca.isset("delta"));
        assert!(!ca.isset("epsy"));
    }
}

#[test]
fn every_long_flag_fires_its_callback_once() {
    let hits = RefCell::new(Vec::new());
    let mut ca = CheckArg::new("test05");
    for long in ["alpha", "beta", "gamma"] {
        let hits = &hits;
        ca.register(OptionSpec::new(long).callback(move |_, name, value| {
            hits.borrow_mut().push((name.to_string(), value.to_string()));
            Ok(())
        }));
    }

    for long in ["alpha", "beta", "gamma"] {
        hits.borrow_mut().clear();
        ca.parse([format!("--{long}")]).unwrap();
        assert!(ca.isset(long));
        assert_eq!(*hits.borrow(), [(long.to_string(), String::new())]);
    }
}

#[test]
fn value_options_in_all_forms() {
    let forms: [&[&str]; 5] = [
        &["--input=val"],
        &["--input", "val"],
        &["-ival"],
        &["-i", "val"],
        &["-qival"],
    ];

    let mut ca = CheckArg::new("test06");
    ca.add('i', "input", "file to read from", ValueType::Required, None);
    ca.add('q', "quiet", "say less", ValueType::None, None);
    for argv in forms {
        ca.parse(argv).unwrap();
        assert_eq!(ca.value("input"), Some("val"), "argv: {argv:?}");
        assert!(ca.pos_args().is_empty());
    }
}

#[test]
fn general_usage_with_positional_separator() {
    let mut ca = CheckArg::new("test04");
    ca.add('i', "input", "file to read from", ValueType::Required, None);

    ca.parse_argv(["/test04", "-i", "input.bin", "--", "file1", "file2"])
        .unwrap();
    assert_eq!(ca.callname(), "/test04");
    assert_eq!(ca.value("input"), Some("input.bin"));
    assert_eq!(ca.pos_args(), ["file1", "file2"]);
}

#[test]
fn dashed_arguments_after_separator_stay_positional() {
    let all = ["--file1", "-f", "-fg", "--file2", "-g", "-hi", "-jk", "--", "-"];

    let mut ca = CheckArg::new("test04");
    ca.add('i', "input", "file to read from", ValueType::Required, None);
    for first in all {
        for second in all {
            let argv = ["-i", "input.bin", "--", first, second];
            ca.parse(argv).unwrap();
            assert_eq!(ca.pos_args(), [first, second]);
        }
    }
}

#[test]
fn reuse_resets_previous_results() {
    let mut ca = CheckArg::new("test09");
    ca.add_autohelp();
    ca.add('a', "alpha", "alpha option", ValueType::Required, Some("A"));
    ca.add_long("beta", "beta option", ValueType::Required, Some("B"));
    ca.add_long_cb("delta", "delta option", |_, _, _| Ok(()), ValueType::Required, None);

    ca.parse(["-a", "a-val"]).unwrap();
    assert_eq!(ca.value("alpha"), Some("a-val"));

    ca.parse(["--beta", "b-val"]).unwrap();
    assert!(!ca.isset("alpha"));
    assert_eq!(ca.value("beta"), Some("b-val"));

    ca.parse(["--delta", "d-val"]).unwrap();
    assert!(!ca.isset("beta"));
    assert_eq!(ca.value("delta"), Some("d-val"));

    // callbacks stay registered across runs
    ca.parse(["--delta=again"]).unwrap();
    assert_eq!(ca.value("delta"), Some("again"));
}

#[test]
fn first_error_wins() {
    let mut ca = CheckArg::new("test");
    ca.add('v', "verbose", "talk", ValueType::None, None);

    let err = ca.parse(["--bogus", "--verbose=1", "-x"]).unwrap_err();
    assert_eq!(err.status(), Status::InvalidArgument);
    assert!(!ca.isset("verbose"));

    let err = ca.parse(["--verbose=1", "--bogus"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidValueGiven { .. }));
}

#[test]
fn callback_error_stops_everything() {
    let after = Cell::new(false);
    let mut ca = CheckArg::new("test");
    ca.add_long_cb(
        "check",
        "fails on bad values",
        |_, _, value| {
            if value == "bad" {
                return Err(format!("value {value} rejected").into());
            }
            Ok(())
        },
        ValueType::Required,
        None,
    );
    ca.add_long_cb(
        "after",
        "never reached",
        |_, _, _| {
            after.set(true);
            Ok(())
        },
        ValueType::None,
        None,
    );

    let result = ca.parse(["--check", "bad", "--after", "pos"]);
    assert_eq!(Status::of(&result), Status::CallbackError);
    assert!(!after.get());
    assert!(ca.pos_args().is_empty());

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Callback returned with error code: --check: value bad rejected"
    );
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("value bad rejected"));

    ca.parse(["--check", "good", "--after"]).unwrap();
    assert!(after.get());
}

#[test]
fn autohelp_requests_exit_zero() {
    let mut ca = CheckArg::new("test");
    ca.add_autohelp();
    ca.add('v', "verbose", "talk", ValueType::None, None);

    assert_eq!(ca.parse(["-v", "--help", "ignored"]).unwrap(), Flow::Exit(0));
    assert!(ca.pos_args().is_empty());
    assert_eq!(ca.parse(["-vh"]).unwrap(), Flow::Exit(0));
    assert_eq!(ca.parse(["-v"]).unwrap(), Flow::Continue);
}
