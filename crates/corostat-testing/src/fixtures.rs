//! Captured tool output used across unit and integration tests.

/// `corosync-cfgtool -s` with two healthy rings
pub const CFGTOOL_TWO_RINGS: &str = "Printing ring status.
Local node ID 1084780051
RING ID 0
\t\tid      = 10.0.0.1
\t\tstatus  = ring 0 active with no faults
RING ID 1
\t\tid      = 172.16.0.1
\t\tstatus  = ring 1 active with no faults";

/// `corosync-cfgtool -s` where ring 0 has been marked faulty
pub const CFGTOOL_FAULTY_RING: &str = "Printing ring status.
\tLocal node ID 16777226
\tRING ID 0
\t\t\tid      = 10.0.0.1
\t\t\tstatus  = Marking ringid 0 interface 10.0.0.1 FAULTY
\tRING ID 1
\t\t\tid      = 172.16.0.1
\t\t\tstatus  = ring 1 active with no faults";

/// `corosync-quorumtool -p` on a quorate two node cluster
pub const QUORUMTOOL_QUORATE: &str = "Quorum information
------------------
Date:             Sun Sep 29 16:10:37 2019
Quorum provider:  corosync_votequorum
Nodes:            2
Node ID:          1084780051
Ring ID:          1084780051/44
Quorate:          Yes

Votequorum information
----------------------
Expected votes:   232
Highest expected: 22
Total votes:      21
Quorum:           421  
Flags:            2Node Quorate WaitForAll 

Membership information
----------------------
\tNodeid      Votes Name
1084780051          1 dma-dog-hana01 (local)
1084780052          1 dma-dog-hana02";

/// `corosync-quorumtool -p` on a node that lost its peer
pub const QUORUMTOOL_NOT_QUORATE: &str = "Quorum information
------------------
Date:             Mon Sep 30 08:01:12 2019
Quorum provider:  corosync_votequorum
Nodes:            1
Node ID:          16777226
Ring ID:          16777226/52
Quorate:          No

Votequorum information
----------------------
Expected votes:   2
Highest expected: 2
Total votes:      1
Quorum:           2 Activity blocked
Flags:            

Membership information
----------------------
    Nodeid      Votes Name
  16777226          1 node-a (local)
";
