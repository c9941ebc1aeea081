//! Edge case tests for arith-lex
