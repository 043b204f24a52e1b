use mumdex::{RunConfig, Sequence, run};

fn run_to_string(sequences: &[Sequence], config: &RunConfig) -> String {
    let mut out = Vec::new();
    run(sequences, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn anchor_fields(output: &str) -> Vec<(usize, usize, usize)> {
    output
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(|line| {
            let mut fields = line.split_whitespace().map(|f| f.parse().unwrap());
            (
                fields.next().unwrap(),
                fields.next().unwrap(),
                fields.next().unwrap(),
            )
        })
        .collect()
}

#[test]
fn identical_sequences() {
    let sequences = [
        Sequence::new("ref", b"ACGTACGTACGTACGT").unwrap(),
        Sequence::new("query", b"ACGTACGTACGTACGT").unwrap(),
    ];
    let config = RunConfig::new().min_length(1).cache_depth(4);

    let output = run_to_string(&sequences, &config);

    assert!(output.starts_with("> query\n"));
    assert_eq!(anchor_fields(&output), [(1, 1, 16)]);
}

#[test]
fn single_unique_substring() {
    let sequences = [
        Sequence::new("ref", b"AAAACGTAAAA").unwrap(),
        Sequence::new("query", b"CGTGG").unwrap(),
    ];
    let config = RunConfig::new().min_length(3).cache_depth(3);

    let output = run_to_string(&sequences, &config);

    assert_eq!(anchor_fields(&output), [(5, 1, 3)]);
}

#[test]
fn non_unique_prefix_is_not_reported() {
    let sequences = [
        Sequence::new("ref", b"ACACACAC").unwrap(),
        Sequence::new("query", b"ACAC").unwrap(),
    ];
    let config = RunConfig::new().min_length(1).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    assert_eq!(output, "> query\n");
}

#[test]
fn reverse_complement_scan() {
    let sequences = [
        Sequence::new("ref", b"AAAACCCGGGTTTT").unwrap(),
        Sequence::new("query", b"AAAA").unwrap(),
    ];
    let config = RunConfig::new()
        .forward(false)
        .reverse_complement(true)
        .min_length(4)
        .cache_depth(2);

    let output = run_to_string(&sequences, &config);

    assert!(output.starts_with("> query Reverse\n"));
    // the reverse complement TTTT matches the TTTT span at the reference end
    assert_eq!(anchor_fields(&output), [(11, 1, 4)]);
}

#[test]
fn both_orientations_emit_two_blocks() {
    let sequences = [
        Sequence::new("ref", b"AAAACCCGGGTTTT").unwrap(),
        Sequence::new("query", b"AAAA").unwrap(),
    ];
    let config = RunConfig::new().both().min_length(4).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with('>')).collect();
    assert_eq!(headers, ["> query", "> query Reverse"]);

    assert_eq!(anchor_fields(&output), [(1, 1, 4), (11, 1, 4)]);
}

#[test]
fn no_anchor_spans_an_n() {
    let sequences = [
        Sequence::new("ref", b"ACCGNTGGA").unwrap(),
        Sequence::new("query", b"CCGNTGG").unwrap(),
    ];
    let config = RunConfig::new().min_length(3).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    // both flanks of the N are reported separately, nothing crosses it
    assert_eq!(anchor_fields(&output), [(2, 1, 3), (6, 5, 3)]);
}

#[test]
fn joined_sequence_keeps_its_name() {
    // joining is the concern of the input layer; the header must simply carry
    // the name of the sequence it was given
    let sequences = [
        Sequence::new("ref", b"AAAACGTAAAA").unwrap(),
        Sequence::new("chr1", b"CGTGG").unwrap(),
    ];
    let config = RunConfig::new().min_length(3).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    assert!(output.starts_with("> chr1\n"));
}

#[test]
fn derived_threshold_suppresses_short_anchors() {
    // with an explicit threshold of 0, the minimum anchor length comes from
    // the shustring distribution; for a query much shorter than that length,
    // nothing is reported
    let sequences = [
        Sequence::new("ref", b"TTGCAATTCCGGATGCAAGGCTAGCA").unwrap(),
        Sequence::new("query", b"GGC").unwrap(),
    ];
    let config = RunConfig::new().p_value(0.001).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    assert_eq!(output, "> query\n");
}

#[test]
fn multiple_queries_each_get_a_block() {
    let sequences = [
        Sequence::new("ref", b"AAAACGTAAAA").unwrap(),
        Sequence::new("q1", b"CGTGG").unwrap(),
        Sequence::new("q2", b"TTTTT").unwrap(),
        Sequence::new("q3", b"ACGTA").unwrap(),
    ];
    let config = RunConfig::new().min_length(3).cache_depth(2);

    let output = run_to_string(&sequences, &config);

    let mut headers: Vec<&str> = output.lines().filter(|l| l.starts_with('>')).collect();
    headers.sort_unstable();
    assert_eq!(headers, ["> q1", "> q2", "> q3"]);
}
