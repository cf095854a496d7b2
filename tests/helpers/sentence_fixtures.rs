//! Common CoNLL-U sentences for tests.

// Single compound, no existing spans
pub const HAUSAUFGABE: &str = "# sent_id = 1
# text = Die Hausaufgabe ist fertig.
1\tDie\tder\tDET\tART\tCase=Nom|Definite=Def|Gender=Fem|Number=Sing\t2\tdet\t2:det\t_
2\tHausaufgabe\tHausaufgabe\tNOUN\tNN\tCase=Nom|Gender=Fem|Number=Sing\t4\tnsubj\t4:nsubj\t_
3\tist\tsein\tAUX\tVAFIN\tMood=Ind|Number=Sing|Person=3|Tense=Pres\t4\tcop\t4:cop\t_
4\tfertig\tfertig\tADJ\tADJD\tDegree=Pos\t0\troot\t0:root\tSpaceAfter=No
5\t.\t.\tPUNCT\t$.\t_\t4\tpunct\t4:punct\t_";

// Contraction span "zum" between the verb and the compound
pub const BAHNHOF: &str = "# text = Er geht zum Bahnhof.
1\tEr\ter\tPRON\tPPER\t_\t2\tnsubj\t2:nsubj\t_
2\tgeht\tgehen\tVERB\tVVFIN\t_\t0\troot\t0:root\t_
3-4\tzum\t_\t_\t_\t_\t_\t_\t_\t_
3\tzu\tzu\tADP\tAPPR\t_\t5\tcase\t5:case\t_
4\tdem\tder\tDET\tART\t_\t5\tdet\t5:det\t_
5\tBahnhof\tBahnhof\tNOUN\tNN\t_\t2\tobl\t2:obl\tSpaceAfter=No
6\t.\t.\tPUNCT\t$.\t_\t2\tpunct\t2:punct\t_";

// Short rows, padded with `_` on parse
pub const SHORT_ROWS: &str = "1\tDie\n2\tHaustür\n3\tklemmt";

// DEPS lists with several delimiters and enhanced relations
pub const ENHANCED_DEPS: &str = "1\tKinder\tKind\tNOUN\tNN\t_\t3\tnsubj\t3:nsubj|5:nsubj:xsubj\t_
2\tSpielplatz\tSpielplatz\tNOUN\tNN\t_\t3\tobl\t3:obl;5:obl\t_
3\tlieben\tlieben\tVERB\tVVFIN\t_\t0\troot\t0:root\t_
4\tzu\tzu\tPART\tPTKZU\t_\t5\tmark\t5\t_
5\tspielen\tspielen\tVERB\tVVINF\t_\t3\txcomp\t3:xcomp 2:dep\t_";
