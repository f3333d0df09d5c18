mod fulfillment_test;
