pub const MAN_PAGE: &'static str = r#"NAME
    nextperm - lexicographic next permutation with differential checking

SYNOPSIS
    nextperm [OPTIONS...]
    nextperm [OPTIONS...] ::: ELEMENTS...

DESCRIPTION
    Nextperm computes the lexicographically next permutation of a sequence of
    integers in place, and checks the answer against an independently written
    reference implementation. Repeated values are allowed.

    1. When ELEMENTS are given after `:::`, that single sequence is checked
       and its successor is printed, or `none` when the sequence is already
       the last permutation of its elements.

    2. Otherwise, a number of random trials are generated. Each trial is a
       sequence of length N holding values in [0, N), so that repeated values
       are common. Every trial must receive the same answer from each
       implementation, or the program reports the offending trial and exits
       with status 2.

OPTIONS
    -b, --brute-force
        Additionally compare each answer against a brute-force oracle that
        sorts every arrangement of the sequence. Sequences longer than seven
        elements skip this comparison.

    -h, --help
        Prints this help information.

    -j, --jobs N
        Number of threads that trials are spread across. The default is the
        number of CPU cores. A value ending in `%` is a percentage of the
        CPU cores.

    -n, --length N
        Length of every random sequence. By default each trial picks a length
        between 1 and 100.

    --num-cpu-cores
        Prints the number of CPU cores in the system and exits.

    -q, --quiet
        Do not print the summary after random trials complete.

    -s, --seed N
        Seed for the random trials. Trial number I is generated from the seed
        plus I, so a failing trial can be replayed on its own. The default is
        derived from the current time.

    -t, --trials N
        Number of random trials to run. The default is 1000.

    -v, --verbose
        Prints every trial along with its successor.

EXIT STATUS
    0   every implementation agreed
    1   the command line could not be parsed
    2   the implementations disagreed on at least one sequence

EXAMPLES
    nextperm ::: 1 1 5
    nextperm -b -n 6 -t 100000
    nextperm -v -s 42 -t 10
"#;
